//! Movie records and validated input drafts.
//!
//! A [`MovieDraft`] can only be built through [`MovieDraft::new`], which
//! checks every field, so catalog mutations never see invalid input.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::{CoreError, FieldViolation};
use crate::id::MovieId;

/// Accepted length of `name`, in characters.
pub const NAME_LEN: RangeInclusive<usize> = 2..=25;
/// Accepted length of `category`, in characters.
pub const CATEGORY_LEN: RangeInclusive<usize> = 2..=25;
/// Accepted release years.
pub const YEAR_RANGE: RangeInclusive<i64> = 1900..=2100;

/// A movie stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub name: String,
    pub year: i32,
    pub category: String,
}

impl MovieRecord {
    pub(crate) fn from_draft(id: MovieId, draft: MovieDraft) -> Self {
        MovieRecord {
            id,
            name: draft.name,
            year: draft.year,
            category: draft.category,
        }
    }

    /// Replaces every field except `id`.
    pub(crate) fn apply(&mut self, draft: MovieDraft) {
        self.name = draft.name;
        self.year = draft.year;
        self.category = draft.category;
    }
}

/// Validated field values for a create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    name: String,
    year: i32,
    category: String,
}

impl MovieDraft {
    /// Validates all fields, reporting every violation rather than the first.
    pub fn new(
        name: impl Into<String>,
        year: i64,
        category: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        let category = category.into();
        let mut violations = Vec::new();

        check_len("name", &name, &NAME_LEN, &mut violations);
        check_len("category", &category, &CATEGORY_LEN, &mut violations);
        if !YEAR_RANGE.contains(&year) {
            violations.push(FieldViolation::new(
                "year",
                format!(
                    "must be between {} and {}",
                    YEAR_RANGE.start(),
                    YEAR_RANGE.end()
                ),
            ));
        }

        if !violations.is_empty() {
            return Err(CoreError::InvalidFields(violations));
        }

        Ok(MovieDraft {
            name,
            // In range by the check above.
            year: year as i32,
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

pub(crate) fn check_len(
    field: &str,
    value: &str,
    range: &RangeInclusive<usize>,
    violations: &mut Vec<FieldViolation>,
) {
    let len = value.chars().count();
    if !range.contains(&len) {
        violations.push(FieldViolation::new(
            field,
            format!(
                "must be between {} and {} characters (got {})",
                range.start(),
                range.end(),
                len
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(err: CoreError) -> Vec<FieldViolation> {
        match err {
            CoreError::InvalidFields(v) => v,
            other => panic!("expected InvalidFields, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_draft() {
        let draft = MovieDraft::new("Alien", 1979, "horror").unwrap();
        assert_eq!(draft.name(), "Alien");
        assert_eq!(draft.year(), 1979);
        assert_eq!(draft.category(), "horror");
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(MovieDraft::new("Up", 1900, "sf").is_ok());
        assert!(MovieDraft::new("a".repeat(25), 2100, "b".repeat(25)).is_ok());
    }

    #[test]
    fn rejects_short_and_long_names() {
        let v = violations(MovieDraft::new("X", 2000, "drama").unwrap_err());
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].field, "name");

        let v = violations(MovieDraft::new("a".repeat(26), 2000, "drama").unwrap_err());
        assert_eq!(v[0].field, "name");
    }

    #[test]
    fn rejects_year_outside_range() {
        for year in [1899, 2101, -5, i64::MAX] {
            let v = violations(MovieDraft::new("Alien", year, "horror").unwrap_err());
            assert_eq!(v.len(), 1);
            assert_eq!(v[0].field, "year");
        }
    }

    #[test]
    fn reports_all_violations() {
        let v = violations(MovieDraft::new("", 3000, "").unwrap_err());
        let fields: Vec<_> = v.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "category", "year"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 25 two-byte characters.
        let name = "é".repeat(25);
        assert!(MovieDraft::new(name, 2000, "drama").is_ok());
    }
}
