use log::warn;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{PopStateEvent, Window};

use search_state_shared::{HistoryBag, HistoryError};

use super::conversion::{js_reason, js_to_bag};

const POPSTATE: &str = "popstate";

/// Owns a `popstate` listener on a window. Dropping it unsubscribes.
pub struct PopstateListener {
    window: Window,
    closure: Closure<dyn FnMut(PopStateEvent)>,
}

impl PopstateListener {
    pub fn listen(
        window: &Window,
        mut on_navigated: impl FnMut(HistoryBag) + 'static,
    ) -> Result<Self, HistoryError> {
        let closure: Closure<dyn FnMut(PopStateEvent)> =
            Closure::new(move |event: PopStateEvent| {
                on_navigated(js_to_bag(event.state()));
            });
        window
            .add_event_listener_with_callback(POPSTATE, closure.as_ref().unchecked_ref())
            .map_err(|error| HistoryError::StateConversion {
                reason: js_reason(&error),
            })?;
        Ok(Self {
            window: window.clone(),
            closure,
        })
    }
}

impl Drop for PopstateListener {
    fn drop(&mut self) {
        if let Err(error) = self
            .window
            .remove_event_listener_with_callback(POPSTATE, self.closure.as_ref().unchecked_ref())
        {
            warn!("failed to remove popstate listener: {}", js_reason(&error));
        }
    }
}
