//! The fixed record set a seeded catalog starts from.

use crate::movie::MovieDraft;

static SEED: [(&str, i64, &str); 14] = [
    ("The Godfather", 1972, "drama"),
    ("The Shawshank Redemption", 1994, "drama"),
    ("Schindler's List", 1993, "drama"),
    ("The Exorcist", 1973, "horror"),
    ("The Sound of Music", 1965, "musical"),
    ("Die Hard", 1988, "action"),
    ("Forrest Gump", 1994, "drama"),
    ("The Shining", 1980, "horror"),
    ("West Side Story", 1961, "musical"),
    ("Mad Max: Fury Road", 2015, "action"),
    ("Goodfellas", 1990, "drama"),
    ("Halloween", 1978, "horror"),
    ("Singin' in the Rain", 1952, "musical"),
    ("The Dark Knight", 2008, "action"),
];

/// Seed records in catalog order.
///
/// The literals are known-valid; one that fails validation is skipped
/// rather than aborting startup.
pub fn seed_drafts() -> impl Iterator<Item = MovieDraft> {
    SEED.iter()
        .filter_map(|&(name, year, category)| MovieDraft::new(name, year, category).ok())
}
