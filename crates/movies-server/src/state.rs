//! Application state with a shared [`MovieCatalog`] for concurrent access.
//!
//! [`AppState`] wraps the catalog in `Arc<tokio::sync::RwLock<>>`. Reads
//! (list, get, filter) share the lock; create, update and delete hold the
//! write lock across the whole position lookup and mutation, since a
//! concurrent delete would otherwise shift the position being updated onto
//! an unrelated record.

use std::sync::Arc;

use tokio::sync::RwLock;

use movies_core::MovieCatalog;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The catalog (async RwLock, awaited without blocking the runtime).
    pub catalog: Arc<RwLock<MovieCatalog>>,
}

impl AppState {
    /// Wraps an existing catalog.
    pub fn new(catalog: MovieCatalog) -> Self {
        AppState {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// State holding the fixed seed set.
    pub fn seeded() -> Self {
        Self::new(MovieCatalog::seeded())
    }

    /// State holding an empty catalog.
    pub fn empty() -> Self {
        Self::new(MovieCatalog::new())
    }
}
