//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod extract;
pub mod health;
pub mod index;
pub mod response;
pub mod rules;

use axum::{http::Uri, Router};

use crate::{error::AppError, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(index::routes())
        .merge(health::routes())
        .merge(rules::routes())
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
