//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed or token rejected.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Access denied.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error on user input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation reported by the backend.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Conflict (e.g., duplicate entry).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Backend request failed or returned an error envelope.
    #[error("API error: {0}")]
    Api(String),

    /// Response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Local I/O error (session file, export target).
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Classifies an HTTP status code from the backend into an error variant.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            400 => Self::Validation(message),
            422 => Self::BusinessRule(message),
            _ => Self::Api(message),
        }
    }

    /// Returns the error code for log lines and CLI output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Conflict(_) => "CONFLICT",
            Self::Api(_) => "API_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(401, "UNAUTHORIZED")]
    #[case(403, "FORBIDDEN")]
    #[case(404, "NOT_FOUND")]
    #[case(409, "CONFLICT")]
    #[case(400, "VALIDATION_ERROR")]
    #[case(422, "BUSINESS_RULE_VIOLATION")]
    #[case(500, "API_ERROR")]
    #[case(502, "API_ERROR")]
    fn test_from_status_classification(#[case] status: u16, #[case] code: &str) {
        assert_eq!(AppError::from_status(status, String::new()).error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Unauthorized("msg".into()).to_string(),
            "Authentication failed: msg"
        );
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(AppError::Api("msg".into()).to_string(), "API error: msg");
        assert_eq!(AppError::Decode("msg".into()).to_string(), "Decode error: msg");
    }
}
