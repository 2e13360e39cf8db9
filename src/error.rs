//! Domain error types for the SIT test case BFF.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Required request field missing or blank
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Request body or query could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generation service unreachable or returned a non-success status
    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    /// Generation service answered without a recognizable record array
    #[error("Malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),

    /// Workbook could not be written
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),
}

impl AppError {
    /// Stable machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingInput(_) => "MISSING_INPUT",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::UpstreamFailure(_) => "UPSTREAM_FAILURE",
            AppError::MalformedUpstreamResponse(_) => "MALFORMED_UPSTREAM_RESPONSE",
            AppError::Spreadsheet(_) => "SPREADSHEET_ERROR",
        }
    }

    /// Generic client-facing description.
    fn public_message(&self) -> &'static str {
        match self {
            AppError::MissingInput(_) => "No Jira ticket key provided",
            AppError::InvalidInput(_) => "Invalid request",
            AppError::UpstreamFailure(_) => "Test case generation service failed",
            AppError::MalformedUpstreamResponse(_) | AppError::Spreadsheet(_) => {
                "Failed to generate Excel"
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingInput(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamFailure(_) | AppError::MalformedUpstreamResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Spreadsheet(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.code(), "{}", self);
        } else {
            tracing::warn!(code = self.code(), "{}", self);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.public_message().to_string(),
            code: self.code().to_string(),
            details: Some(self.to_string()),
        })
    }
}

/// Error response body matching OpenAPI schema.
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.error)
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

// Conversion implementations for common error types

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Spreadsheet(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::UpstreamFailure(format!("request timed out: {}", err))
        } else {
            AppError::UpstreamFailure(err.to_string())
        }
    }
}
