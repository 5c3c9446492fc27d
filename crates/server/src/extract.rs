//! Extractors that run the core validators before a handler is called.
//! A rejected request never reaches the handler; the rejection is an
//! [`ApiError`] and is rendered like any other failure.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
};
use serde_json::Value;

use movies_core::models::Movie;
use movies_core::validation::{validate_id, validate_movie_body};

use crate::error::ApiError;

/// A movie id taken from the `{id}` path segment, already checked to be a
/// positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieId(pub i64);

impl<S> FromRequestParts<S> for MovieId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            // Route wired without an `{id}` capture
            Err(rejection) if rejection.status().is_server_error() => {
                return Err(ApiError::unexpected(rejection.body_text()));
            }
            // Segment that does not decode, reported as sent
            Err(_) => {
                let segment = parts
                    .uri
                    .path()
                    .trim_end_matches('/')
                    .rsplit('/')
                    .next()
                    .unwrap_or_default();
                return Err(movies_core::Error::InvalidId(segment.to_string()).into());
            }
        };

        Ok(MovieId(validate_id(&raw)?))
    }
}

/// A create body that satisfies the creation invariant.
#[derive(Debug, Clone)]
pub struct MovieBody(pub Movie);

impl<S> FromRequest<S> for MovieBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(reject_body)?;

        Ok(MovieBody(validate_movie_body(body)?))
    }
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            "Request body too large",
            "PAYLOAD_TOO_LARGE",
            None,
        );
    }
    movies_core::Error::MalformedBody(rejection.body_text()).into()
}
