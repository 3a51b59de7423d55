//! Boundary-checked 1-based positions.

use std::fmt;

use crate::error::CoreError;

/// Exclusive upper fence on positions accepted from clients.
pub const POSITION_LIMIT: i64 = 200;

/// A 1-based catalog position that passed the `0 < position < 200` fence.
///
/// The fence is independent of the catalog's length; a valid `Position` can
/// still point past the end and yield [`CoreError::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    pub fn parse(raw: i64) -> Result<Self, CoreError> {
        if raw <= 0 || raw >= POSITION_LIMIT {
            return Err(CoreError::PositionOutOfRange { raw });
        }
        Ok(Position(raw as u8))
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
