use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

use movies_core::models::Envelope;

use crate::AppState;
use crate::error::ApiResult;
use crate::extract::{MovieBody, MovieId};

pub async fn list(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let movies = state.movie_service.list().await;
    tracing::debug!("Listing {} movies", movies.len());
    (StatusCode::OK, Json(Envelope::data(movies)))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    MovieId(id): MovieId,
) -> ApiResult<impl IntoResponse> {
    tracing::debug!(id, "Fetching movie");
    let movie = state.movie_service.get_by_id(id).await?;
    Ok((StatusCode::OK, Json(Envelope::data(movie))))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    MovieBody(movie): MovieBody,
) -> impl IntoResponse {
    let movie = state.movie_service.create(movie).await;
    (
        StatusCode::OK,
        Json(Envelope::with_message("Movie added successfully", movie)),
    )
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    MovieId(id): MovieId,
) -> ApiResult<impl IntoResponse> {
    let movie = state.movie_service.delete(id).await?;
    Ok((
        StatusCode::OK,
        Json(Envelope::with_message("Movie deleted successfully", movie)),
    ))
}
