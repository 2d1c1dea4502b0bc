//! Router assembly for the movies HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. CORS is restricted to the
/// single configured origin; preflights advertise exactly the four catalog
/// methods and no allowed headers. TraceLayer provides request-level
/// logging via tracing.
pub fn build_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE]);

    Router::new()
        .route("/", get(handlers::meta::root))
        .route(
            "/movies",
            get(handlers::movies::list_movies).post(handlers::movies::create_movie),
        )
        .route(
            "/movies/{id}",
            get(handlers::movies::get_movie)
                .patch(handlers::movies::update_movie)
                .delete(handlers::movies::remove_movie),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
