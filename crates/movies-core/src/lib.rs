//! Domain model for the movies catalog.
//!
//! A [`MovieCatalog`] is an insertion-ordered collection of [`MovieRecord`]s
//! addressed by 1-based [`Position`] at the API boundary, while each record
//! carries a stable [`MovieId`] that survives deletions of its neighbours.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod id;
pub mod movie;
pub mod position;
pub mod seed;

// Re-export commonly used types
pub use catalog::MovieCatalog;
pub use error::{CoreError, FieldViolation};
pub use filter::CategoryPair;
pub use id::MovieId;
pub use movie::{MovieDraft, MovieRecord};
pub use position::Position;
