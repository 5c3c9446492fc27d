use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";

const GENERIC_MESSAGE: &str = "Server error";

/// Unified API error type. Every failure, from validators, handlers, the
/// fallback route, or a caught panic, is turned into one of these and
/// rendered by its `IntoResponse` impl.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        message: impl Into<String>,
        code: impl Into<String>,
        details: Option<Value>,
    ) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, NOT_FOUND, None)
    }

    /// The only error a client sees for an unexpected fault.
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            GENERIC_MESSAGE,
            INTERNAL_ERROR,
            None,
        )
    }

    /// Logs `fault` in full and hides it behind [`ApiError::internal`].
    pub fn unexpected(fault: impl std::fmt::Display) -> Self {
        tracing::error!(error = %fault, "Unexpected fault while handling request");
        Self::internal()
    }
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    ok: bool,
    error: ErrorBody<'a>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: u16,
    message: &'a str,
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_client_error() {
            tracing::debug!(status = %self.status, code = %self.code, "{}", self.message);
        }

        let envelope = ErrorEnvelope {
            ok: false,
            error: ErrorBody {
                status: self.status.as_u16(),
                message: &self.message,
                code: &self.code,
                details: self.details.as_ref(),
            },
        };
        (self.status, Json(envelope)).into_response()
    }
}

/// Convert from core errors to API errors
impl From<movies_core::Error> for ApiError {
    fn from(err: movies_core::Error) -> Self {
        use movies_core::Error;

        if err.is_internal() {
            return Self::unexpected(&err);
        }

        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let code = err.code();
        let details = match &err {
            Error::InvalidId(raw) => Some(json!({ "field": "id", "value": raw })),
            Error::MalformedBody(reason) => Some(json!({ "reason": reason })),
            Error::Validation { field, value, .. } => {
                Some(json!({ "field": field, "value": value }))
            }
            _ => None,
        };
        let message = match &err {
            Error::NotFound => "Movie not found".to_string(),
            other => other.to_string(),
        };

        Self::new(status, message, code, details)
    }
}

/// Panic hook for `CatchPanicLayer`; the payload is logged, never sent.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::unexpected(format!("handler panicked: {}", detail)).into_response()
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
