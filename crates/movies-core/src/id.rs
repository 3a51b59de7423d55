//! Stable record identifier.
//!
//! A [`MovieId`] is assigned once when a record enters the catalog and is
//! never reused, so it stays attached to its record while positions shift.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Stable movie identifier. Serialized as a decimal string (`"7"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MovieId(pub u64);

impl MovieId {
    /// The identifier following this one.
    pub fn next(self) -> MovieId {
        MovieId(self.0 + 1)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(MovieId)
    }
}

impl Serialize for MovieId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_id_display() {
        assert_eq!(format!("{}", MovieId(7)), "7");
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&MovieId(14)).unwrap();
        assert_eq!(json, "\"14\"");
    }

    #[test]
    fn parses_from_display_form() {
        let id: MovieId = "42".parse().unwrap();
        assert_eq!(id, MovieId(42));
        assert!("forty-two".parse::<MovieId>().is_err());
    }

    #[test]
    fn next_increments() {
        assert_eq!(MovieId(1).next(), MovieId(2));
    }
}
