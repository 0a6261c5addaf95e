//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Upper bound accepted for the request timeout
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Default maximum JSON body size in bytes (1 MB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default `GET /` message
pub const DEFAULT_SERVICE_NAME: &str = "Rule Validation API";

// =============================================================================
// ROUTES
// =============================================================================

pub mod routes {
    pub const INDEX: &str = "/";
    pub const HEALTH: &str = "/health";
    pub const VALIDATE_RULE: &str = "/validate-rule";
}

// =============================================================================
// RULE CONDITIONS
// =============================================================================

/// Condition tags accepted in `rule.condition`
pub mod conditions {
    pub const EQ: &str = "eq";
    pub const NEQ: &str = "neq";
    pub const GT: &str = "gt";
    pub const GTE: &str = "gte";
    pub const CONTAINS: &str = "contains";

    /// All supported condition tags
    pub const ALL: &[&str] = &[EQ, NEQ, GT, GTE, CONTAINS];
}

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

/// Client-facing messages for request shape violations
pub mod messages {
    pub const RULE_REQUIRED: &str = "rule is required.";
    pub const RULE_NOT_OBJECT: &str = "rule should be an object.";
    pub const FIELD_REQUIRED: &str = "rule field is required.";
    pub const FIELD_NOT_STRING: &str = "rule field should be a string.";
    pub const CONDITION_REQUIRED: &str = "rule condition is required.";
    pub const CONDITION_UNSUPPORTED: &str =
        "rule condition accepts only 'eq','neq','gt','gte' or 'contains'.";
    pub const CONDITION_VALUE_REQUIRED: &str = "rule condition value is required.";
    pub const CONDITION_VALUE_NOT_NUMBER: &str = "rule condition value should be a number.";
    pub const DATA_REQUIRED: &str = "data is required.";
    pub const DATA_UNSUPPORTED: &str = "data should be an object, string or an array.";
    pub const INVALID_JSON: &str = "Invalid JSON payload passed.";
    pub const PAYLOAD_TOO_LARGE: &str = "request body is too large.";
    pub const REQUEST_TIMEOUT: &str = "request timed out.";
    pub const INTERNAL: &str = "An internal error occurred";
}

/// Separator between the outer and inner key of a nested field path
pub const FIELD_PATH_SEPARATOR: char = '.';

/// String form of a JSON object when used by the `contains` condition
pub const OBJECT_STRING_FORM: &str = "[object Object]";
