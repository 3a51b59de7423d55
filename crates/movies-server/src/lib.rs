//! HTTP/JSON API over the in-memory movie catalog.
//!
//! Provides the axum router, shared application state, request/response
//! schema types, extractors for positional paths and category queries, and
//! the error type that gives every failure one JSON shape.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
