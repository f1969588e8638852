use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::core::util::format_number;

/// The value of one logical setting, tagged by type. Numbers are `f64`
/// because numeric widget input is parsed from free text and may legitimately
/// hold `NaN` until a consumer guards against it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl SettingValue {
    pub fn as_bool(&self) -> Option<bool> {
        if let SettingValue::Bool(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        if let SettingValue::Number(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let SettingValue::String(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// True when both values carry the same variant, regardless of content.
    pub fn same_variant(&self, other: &SettingValue) -> bool {
        matches!(
            (self, other),
            (SettingValue::Bool(_), SettingValue::Bool(_))
                | (SettingValue::Number(_), SettingValue::Number(_))
                | (SettingValue::String(_), SettingValue::String(_))
        )
    }

    /// Converts to the JSON representation used by the key-value store.
    /// Non-finite numbers have no JSON form and map to null.
    pub fn to_json(&self) -> JsonValue {
        match self {
            SettingValue::Bool(v) => JsonValue::Bool(*v),
            SettingValue::Number(v) => serde_json::Number::from_f64(*v)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            SettingValue::String(v) => JsonValue::String(v.clone()),
        }
    }

    /// Reads a stored JSON value back into a tagged value. Arrays, objects
    /// and null do not correspond to any widget type and yield `None`.
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Bool(v) => Some(SettingValue::Bool(*v)),
            JsonValue::Number(v) => v.as_f64().map(SettingValue::Number),
            JsonValue::String(v) => Some(SettingValue::String(v.clone())),
            _ => None,
        }
    }
}

impl Default for SettingValue {
    fn default() -> Self {
        Self::Bool(false)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(v) => write!(f, "{}", v),
            SettingValue::Number(v) => write!(f, "{}", format_number(*v)),
            SettingValue::String(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_round_trip() {
        let value = SettingValue::Number(2.5);
        assert_eq!(
            SettingValue::from_json(&value.to_json()),
            Some(SettingValue::Number(2.5))
        );
        assert_eq!(SettingValue::from_json(&json!(null)), None);
        assert_eq!(SettingValue::from_json(&json!([1, 2])), None);
    }

    #[test]
    fn test_nan_has_no_json_form() {
        assert_eq!(SettingValue::Number(f64::NAN).to_json(), JsonValue::Null);
    }

    #[test]
    fn test_display() {
        assert_eq!(SettingValue::Number(4.0).to_string(), "4");
        assert_eq!(SettingValue::Bool(true).to_string(), "true");
    }
}
