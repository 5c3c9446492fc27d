use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid movie id: {0}")]
    InvalidId(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("{message}")]
    Validation {
        message: String,
        field: String,
        value: serde_json::Value,
    },

    #[error("Movie not found")]
    NotFound,

    #[error("Seed data error: {0}")]
    Seed(String),
}

impl Error {
    pub fn validation(
        field: impl Into<String>,
        message: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        Error::Validation {
            message: message.into(),
            field: field.into(),
            value,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidId(_) | Error::MalformedBody(_) => 400,
            Error::NotFound => 404,
            Error::Validation { .. } => 422,
            Error::Seed(_) => 500,
        }
    }

    /// Machine-readable code carried in the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidId(_) => "INVALID_ID",
            Error::MalformedBody(_) | Error::Validation { .. } => "VALIDATION_ERROR",
            Error::NotFound => "NOT_FOUND",
            Error::Seed(_) => "INTERNAL_ERROR",
        }
    }

    /// Faults whose text must stay server-side.
    pub fn is_internal(&self) -> bool {
        self.status_code() >= 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::InvalidId("abc".into()).status_code(), 400);
        assert_eq!(Error::MalformedBody("eof".into()).status_code(), 400);
        assert_eq!(
            Error::validation("year", "out of range", json!(1816)).status_code(),
            422
        );
        assert_eq!(Error::NotFound.status_code(), 404);
        assert_eq!(Error::Seed("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_codes() {
        assert_eq!(Error::InvalidId("x".into()).code(), "INVALID_ID");
        assert_eq!(Error::NotFound.code(), "NOT_FOUND");
        assert_eq!(Error::Seed("bad".into()).code(), "INTERNAL_ERROR");
        assert!(Error::Seed("bad".into()).is_internal());
        assert!(!Error::NotFound.is_internal());
    }

    #[test]
    fn test_validation_display_is_message() {
        let err = Error::validation("title", "title must be a non-empty string", json!(""));
        assert_eq!(err.to_string(), "title must be a non-empty string");
    }
}
