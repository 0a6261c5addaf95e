//! Response envelope shared by every endpoint

use serde::Serialize;

use crate::models::ValidationReport;

/// Outcome marker in the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Uniform `{ message, status, data }` body
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub status: ResponseStatus,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            status: ResponseStatus::Success,
            data,
        }
    }

    pub fn error(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            status: ResponseStatus::Error,
            data,
        }
    }
}

/// `data` payload of a validation response
#[derive(Debug, Serialize)]
pub struct ValidationData {
    pub validation: ValidationReport,
}
