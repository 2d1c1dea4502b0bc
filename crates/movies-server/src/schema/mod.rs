//! API schema types for request/response definitions.
//!
//! Types use serde derives for JSON serialization/deserialization. The
//! movie record itself crosses the wire as [`movies_core::Movie`].

pub mod movies;
