use axum::response::Html;

use crate::error::ApiError;

pub async fn banner() -> Html<&'static str> {
    tracing::debug!("GET /");
    Html("<h1>Movies API running</h1>")
}

pub async fn health_check() -> &'static str {
    "OK"
}

/// Fallback for requests no route accepts
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
