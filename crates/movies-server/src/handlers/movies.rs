//! Movie catalog handlers (list, filter, get, create, update, delete).
//!
//! `{id}` in every path is a 1-based position into the catalog's current
//! order, not the record's stable `id` field.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use movies_core::MovieRecord;

use crate::error::ApiError;
use crate::extract::{CategoryFilter, JsonBody, MoviePosition};
use crate::schema::common::MessageResponse;
use crate::schema::movies::{
    CreateMovieResponse, MovieRequest, CREATED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE,
};
use crate::state::AppState;

/// Lists all movies, or those matching a category pair when both
/// `category1` and `category2` are given.
///
/// `GET /movies`
pub async fn list_movies(
    State(state): State<AppState>,
    CategoryFilter(filter): CategoryFilter,
) -> Json<Vec<MovieRecord>> {
    let catalog = state.catalog.read().await;
    let movies: Vec<MovieRecord> = match &filter {
        Some(pair) => {
            tracing::debug!(
                category1 = pair.first(),
                category2 = pair.second(),
                "filtering movies"
            );
            catalog.filter_by_category_pair(pair).cloned().collect()
        }
        None => catalog.list().cloned().collect(),
    };
    Json(movies)
}

/// Returns the movie at a position.
///
/// `GET /movies/{id}`
pub async fn get_movie(
    State(state): State<AppState>,
    MoviePosition(position): MoviePosition,
) -> Result<Json<MovieRecord>, ApiError> {
    let catalog = state.catalog.read().await;
    let movie = catalog.get_by_position(position.get())?;
    Ok(Json(movie.clone()))
}

/// Appends a movie.
///
/// `POST /movies`
pub async fn create_movie(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<MovieRequest>,
) -> Result<(StatusCode, Json<CreateMovieResponse>), ApiError> {
    let draft = req.into_draft()?;
    let mut catalog = state.catalog.write().await;
    let movie = catalog.create(draft);
    tracing::info!(id = %movie.id, name = %movie.name, "movie created");
    Ok((
        StatusCode::CREATED,
        Json(CreateMovieResponse {
            message: CREATED_MESSAGE,
            id: movie.id,
        }),
    ))
}

/// Replaces the fields of the movie at a position.
///
/// `PUT /movies/{id}`
pub async fn update_movie(
    State(state): State<AppState>,
    MoviePosition(position): MoviePosition,
    JsonBody(req): JsonBody<MovieRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let draft = req.into_draft()?;
    let mut catalog = state.catalog.write().await;
    let movie = catalog.update_by_position(position.get(), draft)?;
    tracing::info!(%position, id = %movie.id, "movie updated");
    Ok(Json(MessageResponse::new(UPDATED_MESSAGE)))
}

/// Removes the movie at a position; later movies move up one position.
///
/// `DELETE /movies/{id}`
pub async fn delete_movie(
    State(state): State<AppState>,
    MoviePosition(position): MoviePosition,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut catalog = state.catalog.write().await;
    let removed = catalog.delete_by_position(position.get())?;
    tracing::info!(%position, id = %removed.id, "movie deleted");
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
