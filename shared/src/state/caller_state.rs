use std::collections::{btree_map, BTreeMap};

use log::warn;
use serde_json::{Map, Value};

use crate::{query::encode_query, StateValue};

/// The caller's flat key/value state. The engine only ever reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallerState {
    entries: BTreeMap<String, StateValue>,
}

impl CallerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert: `CallerState::new().with("page", 2).with("q", None::<&str>)`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StateValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<StateValue>,
    ) -> Option<StateValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<StateValue> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&StateValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Filter-then-stringify. With `serialize_empty_values` every key is kept
    /// and empty values become `""`; otherwise empty keys are skipped.
    pub fn to_serialized(&self, serialize_empty_values: bool) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter(|(_, value)| serialize_empty_values || !value.is_empty())
            .map(|(key, value)| (key.clone(), value.to_query_text()))
            .collect()
    }

    pub fn to_query(&self, serialize_empty_values: bool) -> String {
        encode_query(self.to_serialized(serialize_empty_values))
    }

    /// JSON object stored in the history sub-slot. `Absent` keys are omitted.
    pub fn to_json(&self) -> Value {
        let object: Map<String, Value> = self
            .entries
            .iter()
            .filter_map(|(key, value)| value.to_json().map(|json| (key.clone(), json)))
            .collect();
        Value::Object(object)
    }

    /// Reads a stored sub-slot back. Anything that is not an object is empty;
    /// non-scalar members are skipped.
    pub fn from_json(value: &Value) -> Self {
        let Value::Object(object) = value else {
            if !value.is_null() {
                warn!("history sub-slot is not an object, treating it as empty");
            }
            return Self::new();
        };
        let mut state = Self::new();
        for (key, member) in object {
            match StateValue::from_json(member) {
                Some(scalar) => {
                    state.entries.insert(key.clone(), scalar);
                }
                None => warn!("skipping non-scalar history sub-slot member {:?}", key),
            }
        }
        state
    }

    /// Value equality as stored in history: both sides are compared in their
    /// sub-slot JSON form, so `Absent` keys do not count and non-finite
    /// numbers match the text they were stored as.
    pub fn stored_eq(&self, other: &CallerState) -> bool {
        self.to_json() == other.to_json()
    }
}

impl<K: Into<String>, V: Into<StateValue>> FromIterator<(K, V)> for CallerState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for CallerState {
    type Item = (String, StateValue);
    type IntoIter = btree_map::IntoIter<String, StateValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
