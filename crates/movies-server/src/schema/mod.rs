//! API schema types for request/response definitions.
//!
//! Types use serde derives for JSON serialization/deserialization. Records
//! are returned as [`movies_core::MovieRecord`] directly.

pub mod common;
pub mod movies;
