//! Rule validation handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{routing::post, Router};

use crate::{constants::routes as paths, state::AppState};

/// Rule validation routes
pub fn routes() -> Router<AppState> {
    Router::new().route(paths::VALIDATE_RULE, post(handler::validate_rule))
}
