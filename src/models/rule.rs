//! Rule model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{conditions, FIELD_PATH_SEPARATOR};

/// A rule that passed shape validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub field: String,
    pub condition: Condition,
    pub condition_value: Value,
}

impl Rule {
    pub fn path(&self) -> FieldPath<'_> {
        FieldPath::parse(&self.field)
    }
}

/// Rule condition enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Eq,
    Neq,
    Gt,
    Gte,
    Contains,
}

impl Condition {
    /// Get condition as its wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => conditions::EQ,
            Self::Neq => conditions::NEQ,
            Self::Gt => conditions::GT,
            Self::Gte => conditions::GTE,
            Self::Contains => conditions::CONTAINS,
        }
    }

    /// Parse condition from its wire tag. Only exact tags are accepted.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            conditions::EQ => Some(Self::Eq),
            conditions::NEQ => Some(Self::Neq),
            conditions::GT => Some(Self::Gt),
            conditions::GTE => Some(Self::Gte),
            conditions::CONTAINS => Some(Self::Contains),
            _ => None,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of the inspected value inside an object payload.
///
/// Only one level of nesting exists: the path is split on the first
/// separator, so `"a.b.c"` addresses key `"b.c"` inside `"a"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath<'a> {
    Plain(&'a str),
    Nested { outer: &'a str, inner: &'a str },
}

impl<'a> FieldPath<'a> {
    pub fn parse(field: &'a str) -> Self {
        match field.split_once(FIELD_PATH_SEPARATOR) {
            Some((outer, inner)) => Self::Nested { outer, inner },
            None => Self::Plain(field),
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested { .. })
    }
}
