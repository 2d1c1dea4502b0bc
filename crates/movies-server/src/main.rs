//! Binary entrypoint for the movies HTTP server.
//!
//! Reads configuration from environment variables:
//! - `PORT`: server listen port (default: "3000")
//! - `MOVIES_DATA_PATH`: path to a movies JSON file (default: embedded seed)
//! - `MOVIES_ALLOWED_ORIGIN`: CORS origin (default: "http://127.0.0.1:5500")

use axum::http::HeaderValue;

use movies_server::router::build_router;
use movies_server::state::{AppState, SEED_DATASET};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let allowed_origin = std::env::var("MOVIES_ALLOWED_ORIGIN")
        .unwrap_or_else(|_| "http://127.0.0.1:5500".to_string());

    let dataset = match std::env::var("MOVIES_DATA_PATH") {
        Ok(path) => std::fs::read_to_string(path).expect("failed to read movie dataset file"),
        Err(_) => SEED_DATASET.to_string(),
    };

    let state = AppState::from_json(&dataset).expect("failed to parse movie dataset");

    let origin = allowed_origin
        .parse::<HeaderValue>()
        .expect("invalid MOVIES_ALLOWED_ORIGIN value");

    let app = build_router(state, origin);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("movies server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
