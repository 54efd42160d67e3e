use log::warn;
use wasm_bindgen::prelude::*;

use search_state_shared::{HistoryError, SyncConfig, WriteOutcome};

use super::{
    conversion::{js_to_caller_state, search_to_js},
    window::{attach_to_window, WindowSearchState},
};

fn to_js_error(error: HistoryError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

/// JavaScript entry point:
///
/// ```js
/// const sync = new SearchStateSync(search => setState(search), { pushUpdatedStateToHistory: false });
/// sync.stateChanged({ page: 2, q: null });
/// sync.detach();
/// ```
#[wasm_bindgen(js_name = SearchStateSync)]
pub struct JsSearchStateSync {
    inner: WindowSearchState,
}

#[wasm_bindgen(js_class = SearchStateSync)]
impl JsSearchStateSync {
    #[wasm_bindgen(constructor)]
    pub fn new(on_search_changed: js_sys::Function, options: JsValue) -> Result<JsSearchStateSync, JsValue> {
        let config: SyncConfig = if options.is_undefined() || options.is_null() {
            SyncConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        let inner = attach_to_window(config, move |search| {
            if let Err(error) = on_search_changed.call1(&JsValue::NULL, &search_to_js(search)) {
                warn!("onSearchChanged threw: {:?}", error);
            }
        })
        .map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Returns `"pending"`, `"unchanged"`, `"replaced"` or `"pushed"`.
    #[wasm_bindgen(js_name = stateChanged)]
    pub fn state_changed(&self, state: JsValue) -> Result<String, JsValue> {
        let caller_state = js_to_caller_state(&state)?;
        let outcome = self.inner.state_changed(&caller_state).map_err(to_js_error)?;
        Ok(match outcome {
            WriteOutcome::Pending => "pending",
            WriteOutcome::Unchanged => "unchanged",
            WriteOutcome::Replaced => "replaced",
            WriteOutcome::Pushed => "pushed",
        }
        .to_string())
    }

    #[wasm_bindgen(js_name = addressChanged)]
    pub fn address_changed(&self) -> bool {
        self.inner.address_changed()
    }

    pub fn detach(self) {
        self.inner.detach();
    }
}
