mod browser_history;
mod conversion;
mod js_api;
mod popstate_listener;
mod window;

pub use browser_history::BrowserHistory;
pub use js_api::JsSearchStateSync;
pub use popstate_listener::PopstateListener;
pub use window::{attach_to_window, WindowSearchState};
