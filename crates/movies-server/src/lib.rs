//! HTTP/JSON API server for the in-memory movies catalog.
//!
//! Exposes REST-style CRUD routes over a single collection of movie
//! records loaded once at startup. This crate contains the server
//! framework glue: API error mapping, route handlers, schema types,
//! router assembly, and shared state around [`movies_core::Catalog`].

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
