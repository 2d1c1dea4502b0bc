//! Root liveness/greeting handler.

use axum::Json;

use crate::schema::movies::MessageResponse;

/// `GET /`
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse { message: "jejeje" })
}
