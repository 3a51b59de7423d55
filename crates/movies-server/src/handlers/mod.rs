//! HTTP handler modules for the movies API.
//!
//! Handlers are thin: extractors validate input, handlers take the catalog
//! lock, delegate to [`movies_core::MovieCatalog`], and return JSON.

pub mod fallback;
pub mod index;
pub mod movies;
