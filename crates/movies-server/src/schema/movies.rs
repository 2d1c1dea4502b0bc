//! Movie route request/response types.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the movie listing route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMoviesQuery {
    /// Optional case-insensitive genre filter.
    pub genre: Option<String>,
}

/// Fixed-message response body (`{"message": ...}`).
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
