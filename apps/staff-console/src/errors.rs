use thiserror::Error;

use crate::api_client::ApiError;
use crate::session::StorageError;

/// Application-level error type.
/// Returned by view handlers and rendered inline by the CLI; never fatal to the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unable to read input: {0}")]
    Input(String),
}

impl AppError {
    /// The human-readable message shown to the user next to the failed action.
    ///
    /// API failures show the server-provided message verbatim; everything else
    /// falls back to the display text.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(e) => e.message().to_string(),
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_is_passed_through() {
        let err = AppError::from(ApiError::Rejected {
            status: 401,
            message: "invalid token".to_string(),
        });
        assert_eq!(err.user_message(), "invalid token");
    }

    #[test]
    fn test_validation_message_has_no_prefix() {
        let err = AppError::Validation("Login password is required for new staff".to_string());
        assert_eq!(
            err.user_message(),
            "Login password is required for new staff"
        );
    }
}
