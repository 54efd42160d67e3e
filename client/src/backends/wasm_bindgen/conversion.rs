use js_sys::{Array, Object, Reflect};
use log::warn;
use serde::Serialize;
use serde_json::{Map, Value};
use wasm_bindgen::{JsCast, JsValue};

use search_state_shared::{CallerState, HistoryBag, HistoryError, SearchState, StateValue};

/// Best-effort reason text for a thrown JS value.
pub(crate) fn js_reason(error: &JsValue) -> String {
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

pub(crate) fn bag_to_js(bag: &Value) -> Result<JsValue, HistoryError> {
    bag.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|error| HistoryError::StateConversion {
            reason: error.to_string(),
        })
}

/// Converts a history entry's state object key by key. Members that are not
/// representable as JSON are skipped; they are never written back from here.
pub(crate) fn js_to_bag(state: JsValue) -> HistoryBag {
    if state.is_null() || state.is_undefined() {
        return Value::Null;
    }
    let Some(object) = state.dyn_ref::<Object>() else {
        return serde_wasm_bindgen::from_value(state).unwrap_or(Value::Null);
    };
    let mut map = Map::new();
    for entry in Object::entries(object).iter() {
        let pair: Array = entry.unchecked_into();
        let Some(key) = pair.get(0).as_string() else {
            continue;
        };
        match serde_wasm_bindgen::from_value::<Value>(pair.get(1)) {
            Ok(value) => {
                map.insert(key, value);
            }
            Err(error) => warn!("history state member {:?} is not JSON: {}", key, error),
        }
    }
    Value::Object(map)
}

/// Builds the state object actually handed to `replaceState`/`pushState`:
/// the live JS state, shallow-copied, with every member of `bag` laid over
/// it. Live members that could not be read as JSON survive untouched.
pub(crate) fn overlay_bag(live: &JsValue, bag: &HistoryBag) -> Result<JsValue, HistoryError> {
    let Value::Object(members) = bag else {
        return bag_to_js(bag);
    };
    let target = Object::new();
    if let Some(live) = live.dyn_ref::<Object>() {
        Object::assign(&target, live);
    }
    for (key, value) in members {
        let js_value = bag_to_js(value)?;
        Reflect::set(&target, &JsValue::from_str(key), &js_value).map_err(|error| {
            HistoryError::StateConversion {
                reason: js_reason(&error),
            }
        })?;
    }
    Ok(target.into())
}

pub(crate) fn search_to_js(search: &SearchState) -> JsValue {
    let object = Object::new();
    for (key, value) in search.iter() {
        // setting a data property on a fresh plain object cannot throw
        let _ = Reflect::set(&object, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    object.into()
}

/// Reads a caller state object. Values must be strings, numbers, `null` or
/// `undefined`; anything else is rejected with a `TypeError`.
pub(crate) fn js_to_caller_state(state: &JsValue) -> Result<CallerState, JsValue> {
    let Some(object) = state.dyn_ref::<Object>() else {
        return Err(js_sys::TypeError::new("state must be a plain object").into());
    };
    let mut caller_state = CallerState::new();
    for entry in Object::entries(object).iter() {
        let pair: Array = entry.unchecked_into();
        let key = pair
            .get(0)
            .as_string()
            .ok_or_else(|| JsValue::from(js_sys::TypeError::new("state key must be a string")))?;
        let value = pair.get(1);
        let scalar = if let Some(text) = value.as_string() {
            StateValue::Text(text)
        } else if let Some(number) = value.as_f64() {
            StateValue::Number(number)
        } else if value.is_null() {
            StateValue::Null
        } else if value.is_undefined() {
            StateValue::Absent
        } else {
            let message = format!("state value for {:?} must be a string, number, null or undefined", key);
            return Err(js_sys::TypeError::new(&message).into());
        };
        caller_state.insert(key, scalar);
    }
    Ok(caller_state)
}
