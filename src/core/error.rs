// Centralized error handling for the roster service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

/// Rejections raised while validating a roster mutation.
///
/// The `Display` text is what the client sees in the flash message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudentError {
    #[error("Error: a student ID is required.")]
    MissingId,

    #[error("Error: student ID '{0}' is already in use.")]
    DuplicateId(String),

    #[error("Error: email '{0}' is already in use.")]
    DuplicateEmail(String),

    #[error("Error: student '{0}' not found.")]
    NotFound(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Error: invalid username or password.")]
    InvalidCredentials,

    #[error("Please log in to access this page.")]
    LoginRequired,
}

/// Failures that are not the client's fault
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        use crate::models::views::ErrorResponse;

        error!(error = %self, "Request failed");

        let status = match &self {
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_student_error_messages() {
        assert_eq!(
            StudentError::DuplicateId("42".to_string()).to_string(),
            "Error: student ID '42' is already in use."
        );
        assert!(StudentError::DuplicateEmail("a@x.com".to_string())
            .to_string()
            .contains("a@x.com"));
        assert!(StudentError::NotFound("7".to_string()).to_string().contains("not found"));
        assert_eq!(
            StudentError::MissingId.to_string(),
            "Error: a student ID is required."
        );
    }

    #[test]
    fn test_storage_error_is_internal() {
        let response = AppError::from(anyhow!("disk full")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
