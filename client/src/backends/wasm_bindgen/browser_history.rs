use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{History, Url, Window};

use search_state_shared::{HistoryBackend, HistoryBag, HistoryError};

use super::conversion::{js_reason, js_to_bag, overlay_bag};

/// [`HistoryBackend`] over `window.location` and `window.history`.
///
/// Only the search part of the URL is ever changed; path and hash are kept.
pub struct BrowserHistory {
    window: Window,
}

impl BrowserHistory {
    pub fn new() -> Result<Self, HistoryError> {
        let window = web_sys::window().ok_or(HistoryError::WindowUnavailable { what: "window" })?;
        Ok(Self { window })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn history(&self) -> Result<History, HistoryError> {
        self.window
            .history()
            .map_err(|_| HistoryError::WindowUnavailable { what: "history" })
    }

    pub(crate) fn url_with_query(&self, query: &str) -> Result<String, HistoryError> {
        let href = self
            .window
            .location()
            .href()
            .map_err(|_| HistoryError::WindowUnavailable { what: "location" })?;
        let url = Url::new(&href).map_err(|error| HistoryError::StateConversion {
            reason: js_reason(&error),
        })?;
        url.set_search(query);
        Ok(url.href())
    }

    fn live_state(&self) -> JsValue {
        self.history()
            .and_then(|history| {
                history.state().map_err(|error| HistoryError::StateConversion {
                    reason: js_reason(&error),
                })
            })
            .unwrap_or(JsValue::NULL)
    }
}

impl HistoryBackend for BrowserHistory {
    fn query(&self) -> String {
        self.window.location().search().unwrap_or_else(|error| {
            warn!("cannot read location.search: {}", js_reason(&error));
            String::new()
        })
    }

    fn entry_state(&self) -> HistoryBag {
        js_to_bag(self.live_state())
    }

    fn replace_entry(&mut self, query: &str, state: HistoryBag) -> Result<(), HistoryError> {
        let url = self.url_with_query(query)?;
        let js_state = overlay_bag(&self.live_state(), &state)?;
        self.history()?
            .replace_state_with_url(&js_state, "", Some(&url))
            .map_err(|error| HistoryError::ReplaceRejected {
                query: query.to_string(),
                reason: js_reason(&error),
            })
    }

    fn push_entry(&mut self, query: &str, state: HistoryBag) -> Result<(), HistoryError> {
        let url = self.url_with_query(query)?;
        let js_state = overlay_bag(&self.live_state(), &state)?;
        self.history()?
            .push_state_with_url(&js_state, "", Some(&url))
            .map_err(|error| HistoryError::PushRejected {
                query: query.to_string(),
                reason: js_reason(&error),
            })
    }
}
