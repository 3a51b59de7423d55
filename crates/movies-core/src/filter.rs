//! Category-pair filter arguments.

use crate::error::{CoreError, FieldViolation};

/// Minimum length, in characters, of each filter category.
pub const MIN_FILTER_CATEGORY_LEN: usize = 4;

/// Two categories to match against; a record matches if its category equals
/// either one. Passing the same category twice narrows to that category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPair {
    first: String,
    second: String,
}

impl CategoryPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self, CoreError> {
        let first = first.into();
        let second = second.into();
        let violations: Vec<_> = [("category1", &first), ("category2", &second)]
            .into_iter()
            .filter(|(_, value)| value.chars().count() < MIN_FILTER_CATEGORY_LEN)
            .map(|(field, _)| {
                FieldViolation::new(
                    field,
                    format!("must be at least {MIN_FILTER_CATEGORY_LEN} characters"),
                )
            })
            .collect();

        if !violations.is_empty() {
            return Err(CoreError::InvalidFields(violations));
        }
        Ok(CategoryPair { first, second })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn matches(&self, category: &str) -> bool {
        category == self.first || category == self.second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_either_category() {
        let pair = CategoryPair::new("drama", "horror").unwrap();
        assert_eq!(pair.first(), "drama");
        assert_eq!(pair.second(), "horror");
        assert!(pair.matches("drama"));
        assert!(pair.matches("horror"));
        assert!(!pair.matches("action"));
        assert!(!pair.matches("Drama"));
    }

    #[test]
    fn rejects_short_categories() {
        match CategoryPair::new("sci", "war") {
            Err(CoreError::InvalidFields(v)) => {
                let fields: Vec<_> = v.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(fields, vec!["category1", "category2"]);
            }
            other => panic!("expected InvalidFields, got {other:?}"),
        }
        assert!(CategoryPair::new("drama", "war").is_err());
        assert!(CategoryPair::new("noir", "epic").is_ok());
    }
}
