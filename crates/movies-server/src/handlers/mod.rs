//! HTTP handler modules for the movies API.
//!
//! Handlers are thin: they parse the request, acquire the catalog lock,
//! delegate to [`movies_core::Catalog`], and shape the JSON response.
//! No business logic lives in handlers.

pub mod meta;
pub mod movies;
