//! Read-modify-write access to this crate's private slot inside a history
//! entry's data bag. Every other key in the bag belongs to someone else and
//! is carried over untouched.

use log::warn;
use serde_json::{Map, Value};

use crate::constants::HISTORY_STATE_KEY;

/// The data bag a host associates with one history entry.
pub type HistoryBag = Value;

/// Returns the private sub-slot, or `None` when the bag is not an object or
/// has no such key.
pub fn read_sub_slot(bag: &HistoryBag) -> Option<&Value> {
    bag.as_object()?.get(HISTORY_STATE_KEY)
}

/// Shallow-merges `sub_slot` into a copy of `bag` under the reserved key.
/// A bag that is not an object has no keys to preserve and is replaced.
pub fn merge_sub_slot(bag: &HistoryBag, sub_slot: Value) -> HistoryBag {
    let mut object = match bag {
        Value::Object(object) => object.clone(),
        Value::Null => Map::new(),
        other => {
            warn!(
                "history entry state is not an object ({}), starting a fresh one",
                kind_name(other)
            );
            Map::new()
        }
    };
    object.insert(HISTORY_STATE_KEY.to_string(), sub_slot);
    Value::Object(object)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
