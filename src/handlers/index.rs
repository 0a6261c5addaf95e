//! Service identity handler

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{
    config::IdentityConfig, constants::routes as paths, handlers::response::ApiResponse, state::AppState,
};

/// Owner details shown on `GET /`
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl From<&IdentityConfig> for IdentityResponse {
    fn from(identity: &IdentityConfig) -> Self {
        Self {
            name: identity.name.clone(),
            github: identity.github.clone(),
            email: identity.email.clone(),
            mobile: identity.mobile.clone(),
            twitter: identity.twitter.clone(),
        }
    }
}

async fn identity(State(state): State<AppState>) -> Json<ApiResponse<IdentityResponse>> {
    let identity = &state.config().identity;
    Json(ApiResponse::success(
        identity.service_name.clone(),
        IdentityResponse::from(identity),
    ))
}

/// Index routes
pub fn routes() -> Router<AppState> {
    Router::new().route(paths::INDEX, get(identity))
}
