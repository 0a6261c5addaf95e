//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    constants::messages,
    handlers::response::{ApiResponse, ValidationData},
    models::ValidationReport,
};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Request shape errors
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{}", messages::INVALID_JSON)]
    InvalidJson,

    #[error("{}", messages::PAYLOAD_TOO_LARGE)]
    PayloadTooLarge,

    #[error("{}", messages::REQUEST_TIMEOUT)]
    RequestTimeout,

    // Rule outcome errors
    #[error("field {0} is missing from data.")]
    MissingField(String),

    #[error("field {} failed validation.", .0.field)]
    ConditionFailed(Box<ValidationReport>),

    // Routing
    #[error("route {0} not found.")]
    NotFound(String),

    // Runtime faults
    #[error("{0}")]
    Unexpected(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::InvalidJson => "INVALID_JSON",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::RequestTimeout => "REQUEST_TIMEOUT",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::ConditionFailed(_) => "CONDITION_FAILED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unexpected(_) => "UNEXPECTED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_)
            | Self::InvalidJson
            | Self::MissingField(_)
            | Self::ConditionFailed(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unexpected(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                messages::INTERNAL.to_string()
            }
            AppError::Unexpected(e) => {
                tracing::error!("Unexpected error: {}", e);
                self.to_string()
            }
            _ => {
                tracing::debug!(code = self.error_code(), "{}", self);
                self.to_string()
            }
        };

        let data = match self {
            AppError::ConditionFailed(report) => Some(ValidationData {
                validation: *report,
            }),
            _ => None,
        };

        (status, Json(ApiResponse::error(message, data))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::InvalidJson
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
