//! Core error types for movies-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! catalog's failure modes.

use thiserror::Error;

use crate::validate::FieldError;

/// Core errors produced by the movies-core crate.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No record with the given id exists in the collection.
    #[error("movie not found: '{id}'")]
    MovieNotFound { id: String },

    /// A draft or patch failed validation.
    #[error("invalid movie data: {} field error(s)", .0.len())]
    Invalid(Vec<FieldError>),

    /// The seed dataset could not be parsed.
    #[error("failed to parse movie dataset: {0}")]
    Dataset(#[from] serde_json::Error),
}
