use std::fmt::{Display, Formatter, Result as FmtResult};

use serde_json::{Number, Value};

/// A scalar value held under one key of a [`CallerState`](crate::CallerState).
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    Text(String),
    Number(f64),
    /// Explicitly empty.
    Null,
    /// Key is present but carries no value at all.
    Absent,
}

impl StateValue {
    /// `true` for `Null` and `Absent`, the only values treated as empty when
    /// deciding which keys reach the query string. An empty `Text` is a value.
    pub fn is_empty(&self) -> bool {
        matches!(self, StateValue::Null | StateValue::Absent)
    }

    /// Textual form written into the query string. Empty values become `""`.
    pub fn to_query_text(&self) -> String {
        match self {
            StateValue::Text(text) => text.clone(),
            StateValue::Number(number) => number_to_text(*number),
            StateValue::Null | StateValue::Absent => String::new(),
        }
    }

    /// JSON form stored in the history sub-slot. `Absent` has none and is
    /// omitted by the caller.
    pub(crate) fn to_json(&self) -> Option<Value> {
        match self {
            StateValue::Text(text) => Some(Value::String(text.clone())),
            // JSON has no NaN or infinities; keep their query text instead
            StateValue::Number(number) => Some(
                Number::from_f64(*number)
                    .map_or_else(|| Value::String(number_to_text(*number)), Value::Number),
            ),
            StateValue::Null => Some(Value::Null),
            StateValue::Absent => None,
        }
    }

    /// Reads a scalar back out of a stored sub-slot. Arrays and objects are
    /// not scalars and yield `None`.
    pub(crate) fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(StateValue::Text(text.clone())),
            Value::Number(number) => number.as_f64().map(StateValue::Number),
            Value::Bool(flag) => Some(StateValue::Text(flag.to_string())),
            Value::Null => Some(StateValue::Null),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Locale-independent number formatting that parses back to the same `f64`.
/// Integral values carry no fractional part and `-0` prints as `0`.
pub(crate) fn number_to_text(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if number == 0.0 {
        return "0".to_string();
    }
    number.to_string()
}

impl Display for StateValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_query_text())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        StateValue::Text(value)
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        StateValue::Text(value.to_string())
    }
}

impl From<&String> for StateValue {
    fn from(value: &String) -> Self {
        StateValue::Text(value.clone())
    }
}

impl From<f64> for StateValue {
    fn from(value: f64) -> Self {
        StateValue::Number(value)
    }
}

impl From<f32> for StateValue {
    fn from(value: f32) -> Self {
        StateValue::Number(f64::from(value))
    }
}

impl From<i32> for StateValue {
    fn from(value: i32) -> Self {
        StateValue::Number(f64::from(value))
    }
}

impl From<u32> for StateValue {
    fn from(value: u32) -> Self {
        StateValue::Number(f64::from(value))
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        StateValue::Number(value as f64)
    }
}

impl From<u64> for StateValue {
    fn from(value: u64) -> Self {
        StateValue::Number(value as f64)
    }
}

impl From<usize> for StateValue {
    fn from(value: usize) -> Self {
        StateValue::Number(value as f64)
    }
}

impl<T: Into<StateValue>> From<Option<T>> for StateValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StateValue::Null, Into::into)
    }
}
