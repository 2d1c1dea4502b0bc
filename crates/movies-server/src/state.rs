//! Shared application state wrapping the movie catalog.
//!
//! [`AppState`] holds the catalog in `Arc<tokio::sync::Mutex<>>` for use
//! with axum handlers. The async-aware mutex lets handlers await the lock
//! without blocking the tokio runtime; each handler body holds it for its
//! full read-modify-write, so no two handler bodies interleave their
//! access to the collection.

use std::sync::Arc;

use movies_core::{Catalog, CatalogError};

/// The movie dataset bundled into the binary, loaded when no
/// `MOVIES_DATA_PATH` override is configured.
pub const SEED_DATASET: &str = include_str!("../data/movies.json");

/// Shared state for the HTTP server.
///
/// The catalog is the one owning component for the record collection;
/// handlers receive it by state extraction, never through a global.
#[derive(Clone)]
pub struct AppState {
    /// The shared catalog (async Mutex -- non-blocking await).
    pub catalog: Arc<tokio::sync::Mutex<Catalog>>,
}

impl AppState {
    /// Wraps an already-loaded catalog as shared state.
    pub fn new(catalog: Catalog) -> Self {
        AppState {
            catalog: Arc::new(tokio::sync::Mutex::new(catalog)),
        }
    }

    /// Parses a JSON dataset and wraps it as shared state.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        Ok(AppState::new(Catalog::from_json(data)?))
    }

    /// State backed by the embedded seed dataset (used by tests).
    pub fn seeded() -> Result<Self, CatalogError> {
        AppState::from_json(SEED_DATASET)
    }
}
