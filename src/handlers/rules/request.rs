//! Rule validation request DTOs

use serde_json::Value;

/// Raw `POST /validate-rule` body.
///
/// Kept untyped so shape problems surface as validation messages instead of
/// deserialization failures. Explicit `null` is treated the same as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidateRuleRequest {
    pub rule: Option<Value>,
    pub data: Option<Value>,
}

impl From<Value> for ValidateRuleRequest {
    fn from(body: Value) -> Self {
        match body {
            Value::Object(mut map) => Self {
                rule: map.remove("rule").filter(|v| !v.is_null()),
                data: map.remove("data").filter(|v| !v.is_null()),
            },
            _ => Self::default(),
        }
    }
}
