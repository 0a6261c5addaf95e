//! Data payload model

use serde_json::{Map, Value};

use crate::{constants::messages, error::AppError, utils::value::parse_index};

/// The payload a rule is checked against
#[derive(Debug, Clone, PartialEq)]
pub enum DataPayload {
    Object(Map<String, Value>),
    Sequence(Vec<Value>),
    Text(String),
}

impl DataPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Sequence(_) => "array",
            Self::Text(_) => "string",
        }
    }

    /// Look up `key` as an element index.
    ///
    /// Null elements count as absent. Text is indexed by character and
    /// yields a one-character string. Objects have no elements.
    pub fn element(&self, key: &str) -> Option<Value> {
        let index = parse_index(key)?;
        match self {
            Self::Sequence(items) => items.get(index).filter(|v| !v.is_null()).cloned(),
            Self::Text(text) => text.chars().nth(index).map(|c| Value::String(c.to_string())),
            Self::Object(_) => None,
        }
    }
}

impl TryFrom<Value> for DataPayload {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::Object(map)),
            Value::Array(items) => Ok(Self::Sequence(items)),
            Value::String(text) => Ok(Self::Text(text)),
            Value::Null | Value::Bool(_) | Value::Number(_) => Err(AppError::InvalidRequest(
                messages::DATA_UNSUPPORTED.to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatches_supported_shapes() {
        assert!(matches!(
            DataPayload::try_from(json!({"a": 1})),
            Ok(DataPayload::Object(_))
        ));
        assert!(matches!(
            DataPayload::try_from(json!([1, 2])),
            Ok(DataPayload::Sequence(_))
        ));
        assert!(matches!(
            DataPayload::try_from(json!("hello")),
            Ok(DataPayload::Text(_))
        ));
    }

    #[test]
    fn test_kind_names_shape() {
        let kinds: Vec<_> = [json!({}), json!([]), json!("")]
            .into_iter()
            .map(|v| DataPayload::try_from(v).unwrap().kind())
            .collect();
        assert_eq!(kinds, ["object", "array", "string"]);
    }

    #[test]
    fn test_rejects_scalars() {
        for value in [json!(42), json!(true), json!(1.5), Value::Null] {
            let err = DataPayload::try_from(value).unwrap_err();
            assert_eq!(err.to_string(), messages::DATA_UNSUPPORTED);
        }
    }

    #[test]
    fn test_sequence_elements() {
        let data = DataPayload::try_from(json!([0, null, "x"])).unwrap();
        assert_eq!(data.element("0"), Some(json!(0)));
        assert_eq!(data.element("1"), None);
        assert_eq!(data.element("2"), Some(json!("x")));
        assert_eq!(data.element("3"), None);
        assert_eq!(data.element("01"), None);
        assert_eq!(data.element("-1"), None);
    }

    #[test]
    fn test_text_elements_are_characters() {
        let data = DataPayload::try_from(json!("héllo")).unwrap();
        assert_eq!(data.element("1"), Some(json!("é")));
        assert_eq!(data.element("4"), Some(json!("o")));
        assert_eq!(data.element("10"), None);
    }
}
