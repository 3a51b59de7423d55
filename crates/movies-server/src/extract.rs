//! Request extractors that turn axum rejections into [`ApiError`]s.
//!
//! axum's built-in extractors reject with their own plain-text bodies; these
//! wrappers keep every failure on the JSON error shape and apply the
//! position fence and category rules before a handler runs.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use movies_core::{CategoryPair, FieldViolation, Position};

use crate::error::ApiError;
use crate::schema::movies::CategoryQuery;

/// `{id}` path segment parsed as a fenced 1-based [`Position`].
#[derive(Debug, Clone, Copy)]
pub struct MoviePosition(pub Position);

impl<S> FromRequestParts<S> for MoviePosition
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(MoviePosition(Position::parse(raw)?))
    }
}

/// Optional category pair from `?category1=&category2=`.
///
/// `None` when neither parameter is present; both must be given together.
#[derive(Debug, Clone)]
pub struct CategoryFilter(pub Option<CategoryPair>);

impl<S> FromRequestParts<S> for CategoryFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<CategoryQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        match (query.category1, query.category2) {
            (None, None) => Ok(CategoryFilter(None)),
            (Some(first), Some(second)) => {
                Ok(CategoryFilter(Some(CategoryPair::new(first, second)?)))
            }
            (first, _) => {
                let missing = if first.is_none() { "category1" } else { "category2" };
                Err(ApiError::ValidationFailed(vec![FieldViolation::new(
                    missing,
                    "field required",
                )]))
            }
        }
    }
}

/// JSON body whose rejections become [`ApiError`]s.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            ApiError::ValidationFailed(vec![FieldViolation::new("body", err.body_text())])
        }
        other => ApiError::BadRequest(other.body_text()),
    }
}
