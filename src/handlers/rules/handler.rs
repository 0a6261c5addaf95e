//! Rule validation handler implementations

use axum::{extract::State, Json};
use serde_json::Value;

use crate::{
    error::AppResult,
    handlers::{
        extract::AppJson,
        response::{ApiResponse, ValidationData},
    },
    services::RuleService,
    state::AppState,
};

use super::request::ValidateRuleRequest;

/// Validate `data` against a single `rule`
pub async fn validate_rule(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> AppResult<Json<ApiResponse<ValidationData>>> {
    let request = ValidateRuleRequest::from(body);
    let report = RuleService::validate_rule(request, &state.config().validation)?;

    let message = format!("field {} successfully validated.", report.field);
    Ok(Json(ApiResponse::success(
        message,
        ValidationData { validation: report },
    )))
}
