//! rulecheck - Rule Validation Service
//!
//! This library provides the core functionality of a small HTTP service
//! that checks whether one field of a JSON payload satisfies a declarative
//! rule (`eq`, `neq`, `gt`, `gte` or `contains`).
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Rule shape validation and condition evaluation
//! - **Models**: Rules, payloads and validation reports

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderName, StatusCode},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    with_middleware(handlers::routes(), state)
}

/// Wrap `routes` in the service middleware stack and attach the state.
pub fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    let timeout = state.config().server.request_timeout();
    let max_body_bytes = state.config().server.max_body_bytes;
    let request_id = HeaderName::from_static(middleware::logging::REQUEST_ID_HEADER);

    routes
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(axum::middleware::from_fn(middleware::timeout_middleware))
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
