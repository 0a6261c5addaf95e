//! Renders timed-out requests in the standard error envelope

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Replace the bare 408 produced by the timeout layer with an [`AppError`] body.
///
/// Must wrap the timeout layer so it sees its response.
pub async fn timeout_middleware(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::RequestTimeout.into_response();
    }

    response
}
