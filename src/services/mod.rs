//! Business logic services

pub mod rule_service;

pub use rule_service::{ConditionEvaluator, RuleService, RuleValidator};
