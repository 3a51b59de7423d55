//! Core error types for movies-core.
//!
//! Uses `thiserror` for structured, matchable variants covering lookup
//! failures and input validation.

use serde::Serialize;
use thiserror::Error;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Name of the offending field (`name`, `year`, `category`, ...).
    pub field: String,
    /// Human-readable description of the constraint that was violated.
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldViolation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors produced by catalog operations and input validation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No record at the given 1-based position.
    #[error("no movie at position {position}")]
    NotFound { position: usize },

    /// A position fell outside the accepted `0 < position < 200` fence.
    #[error("position {raw} is out of range (expected 0 < position < {max})", max = crate::position::POSITION_LIMIT)]
    PositionOutOfRange { raw: i64 },

    /// One or more input fields failed validation.
    #[error("{} invalid field(s)", .0.len())]
    InvalidFields(Vec<FieldViolation>),
}
