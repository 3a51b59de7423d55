//! Movie request/response types.

use movies_core::{CoreError, MovieDraft, MovieId};
use serde::{Deserialize, Serialize};

pub const CREATED_MESSAGE: &str = "Movie created successfully";
pub const UPDATED_MESSAGE: &str = "Movie updated successfully";
pub const DELETED_MESSAGE: &str = "Movie deleted successfully";

/// Body of `POST /movies` and `PUT /movies/{id}`.
///
/// `year` is accepted as any integer so out-of-range values surface as
/// field violations rather than JSON decoding errors.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRequest {
    pub name: String,
    pub year: i64,
    pub category: String,
}

impl MovieRequest {
    pub fn into_draft(self) -> Result<MovieDraft, CoreError> {
        MovieDraft::new(self.name, self.year, self.category)
    }
}

/// Query string of `GET /movies`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryQuery {
    pub category1: Option<String>,
    pub category2: Option<String>,
}

/// Response from creating a movie.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMovieResponse {
    pub message: &'static str,
    /// Stable id assigned to the new record.
    pub id: MovieId,
}
