//! Rule validation service
//!
//! Checking a request runs two stages in sequence. [`RuleValidator`] gates the
//! request shape; [`ConditionEvaluator`] then locates the field inside the
//! payload and applies the condition. Both are pure: every failure comes back
//! as an [`AppError`] and the HTTP layer decides how to render it.

use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::{
    config::ValidationConfig,
    constants::messages,
    error::{AppError, AppResult},
    handlers::rules::request::ValidateRuleRequest,
    models::{Condition, DataPayload, FieldPath, Rule, ValidationReport},
    utils::value::{compare, parse_index, strict_equals, string_form},
};

/// Rule service for business logic
pub struct RuleService;

impl RuleService {
    /// Validate the request shape, then evaluate the rule against its data
    pub fn validate_rule(
        request: ValidateRuleRequest,
        policy: &ValidationConfig,
    ) -> AppResult<ValidationReport> {
        let (rule, data) = RuleValidator::validate(request, policy)?;

        tracing::debug!(
            field = %rule.field,
            condition = %rule.condition,
            "Evaluating rule"
        );

        let result = ConditionEvaluator::evaluate(&rule, data);
        match &result {
            Ok(_) => tracing::debug!(field = %rule.field, "Rule satisfied"),
            Err(err) => tracing::debug!(field = %rule.field, code = err.error_code(), "Rule not satisfied"),
        }
        result
    }
}

/// Structural gate run before any evaluation
pub struct RuleValidator;

impl RuleValidator {
    /// Check `rule` and `data` are well formed and build a typed [`Rule`].
    ///
    /// Never inspects whether the field exists in `data`.
    pub fn validate(
        request: ValidateRuleRequest,
        policy: &ValidationConfig,
    ) -> AppResult<(Rule, Value)> {
        let rule = match request.rule {
            None => return Err(invalid(messages::RULE_REQUIRED)),
            Some(Value::Object(rule)) => rule,
            Some(_) => return Err(invalid(messages::RULE_NOT_OBJECT)),
        };

        let rule = Rule {
            field: Self::check_field(&rule)?,
            condition: Self::check_condition(&rule)?,
            condition_value: Self::check_condition_value(&rule, policy)?,
        };

        let data = request.data.ok_or_else(|| invalid(messages::DATA_REQUIRED))?;

        Ok((rule, data))
    }

    fn check_field(rule: &Map<String, Value>) -> AppResult<String> {
        match present(rule, "field") {
            None => Err(invalid(messages::FIELD_REQUIRED)),
            Some(Value::String(field)) if field.is_empty() => {
                Err(invalid(messages::FIELD_REQUIRED))
            }
            Some(Value::String(field)) => Ok(field.clone()),
            Some(_) => Err(invalid(messages::FIELD_NOT_STRING)),
        }
    }

    fn check_condition(rule: &Map<String, Value>) -> AppResult<Condition> {
        let condition = present(rule, "condition")
            .ok_or_else(|| invalid(messages::CONDITION_REQUIRED))?;

        condition
            .as_str()
            .and_then(Condition::from_str)
            .ok_or_else(|| invalid(messages::CONDITION_UNSUPPORTED))
    }

    fn check_condition_value(
        rule: &Map<String, Value>,
        policy: &ValidationConfig,
    ) -> AppResult<Value> {
        let value = present(rule, "condition_value")
            .ok_or_else(|| invalid(messages::CONDITION_VALUE_REQUIRED))?;

        if policy.require_numeric_condition_value && !value.is_number() {
            return Err(invalid(messages::CONDITION_VALUE_NOT_NUMBER));
        }

        Ok(value.clone())
    }
}

/// Applies a validated rule to its payload
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Resolve the rule's field in `data` and check its condition
    pub fn evaluate(rule: &Rule, data: Value) -> AppResult<ValidationReport> {
        let payload = DataPayload::try_from(data)?;
        tracing::debug!(
            payload = payload.kind(),
            nested = rule.path().is_nested(),
            "Resolving field"
        );
        let field_value = Self::resolve(rule, &payload)?;

        if Self::holds(rule, &field_value)? {
            Ok(ValidationReport::passed(rule, field_value))
        } else {
            Err(AppError::ConditionFailed(Box::new(ValidationReport::failed(
                rule,
                field_value,
            ))))
        }
    }

    /// Find the value the rule points at, or fail with `MissingField`.
    ///
    /// A nested lookup through a parent that is neither an object nor an
    /// array is a runtime fault rather than a missing field.
    pub fn resolve(rule: &Rule, payload: &DataPayload) -> AppResult<Value> {
        let missing = || AppError::MissingField(rule.field.clone());

        match payload {
            DataPayload::Object(map) => match rule.path() {
                FieldPath::Plain(key) => map.get(key).cloned().ok_or_else(missing),
                FieldPath::Nested { outer, inner } => {
                    let parent = map.get(outer).ok_or_else(missing)?;
                    Self::member(parent, outer, inner)?.ok_or_else(missing)
                }
            },
            DataPayload::Sequence(_) | DataPayload::Text(_) => {
                payload.element(&rule.field).ok_or_else(missing)
            }
        }
    }

    /// Own member `key` of the nested container stored under `outer`
    fn member(parent: &Value, outer: &str, key: &str) -> AppResult<Option<Value>> {
        match parent {
            Value::Object(map) => Ok(map.get(key).cloned()),
            Value::Array(items) => Ok(parse_index(key).and_then(|i| items.get(i)).cloned()),
            _ => Err(AppError::Unexpected(format!(
                "cannot look up key {} in non-object field {}.",
                key, outer
            ))),
        }
    }

    /// Whether `value` satisfies the rule's condition
    pub fn holds(rule: &Rule, value: &Value) -> AppResult<bool> {
        let expected = &rule.condition_value;

        let satisfied = match rule.condition {
            Condition::Eq => strict_equals(value, expected),
            Condition::Neq => !strict_equals(value, expected),
            Condition::Gt => compare(value, expected) == Some(Ordering::Greater),
            Condition::Gte => matches!(
                compare(value, expected),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Condition::Contains => {
                if value.is_null() {
                    return Err(AppError::Unexpected(format!(
                        "cannot read the string form of null field {}.",
                        rule.field
                    )));
                }
                string_form(value).contains(&string_form(expected))
            }
        };

        Ok(satisfied)
    }
}

/// Value under `key` unless absent or null
fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

fn invalid(message: &str) -> AppError {
    AppError::InvalidRequest(message.to_string())
}
