//! Validation report model

use serde::Serialize;
use serde_json::Value;

use super::rule::{Condition, Rule};

/// Outcome of checking one rule, echoed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub error: bool,
    pub field: String,
    pub field_value: Value,
    pub condition: Condition,
    pub condition_value: Value,
}

impl ValidationReport {
    pub fn passed(rule: &Rule, field_value: Value) -> Self {
        Self::new(rule, field_value, false)
    }

    pub fn failed(rule: &Rule, field_value: Value) -> Self {
        Self::new(rule, field_value, true)
    }

    fn new(rule: &Rule, field_value: Value, error: bool) -> Self {
        Self {
            error,
            field: rule.field.clone(),
            field_value,
            condition: rule.condition,
            condition_value: rule.condition_value.clone(),
        }
    }
}
