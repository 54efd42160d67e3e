use search_state_shared::{
    CallerState, HistoryError, SearchState, SyncConfig, WriteOutcome,
};

use crate::SearchStateBinding;

use super::{browser_history::BrowserHistory, popstate_listener::PopstateListener};

/// An attachment to the current browser window: the binding plus its
/// `popstate` subscription. Dropping it (or calling `detach`) unsubscribes.
pub struct WindowSearchState {
    binding: SearchStateBinding<BrowserHistory>,
    listener: Option<PopstateListener>,
}

/// Attaches to `window`, reports the current query through
/// `on_search_changed`, and starts listening for back/forward navigation.
pub fn attach_to_window(
    config: SyncConfig,
    on_search_changed: impl FnMut(&SearchState) + 'static,
) -> Result<WindowSearchState, HistoryError> {
    let history = BrowserHistory::new()?;
    let window = history.window().clone();
    let binding = SearchStateBinding::attach(history, config, on_search_changed);

    let navigation = binding.clone();
    let listener = PopstateListener::listen(&window, move |arrived| {
        navigation.navigated(&arrived);
    })?;

    Ok(WindowSearchState {
        binding,
        listener: Some(listener),
    })
}

impl WindowSearchState {
    pub fn state_changed(&self, state: &CallerState) -> Result<WriteOutcome, HistoryError> {
        self.binding.state_changed(state)
    }

    pub fn address_changed(&self) -> bool {
        self.binding.address_changed()
    }

    pub fn set_on_search_changed(&self, on_search_changed: impl FnMut(&SearchState) + 'static) {
        self.binding.set_on_search_changed(on_search_changed);
    }

    pub fn binding(&self) -> &SearchStateBinding<BrowserHistory> {
        &self.binding
    }

    pub fn detach(mut self) {
        // listener first: it holds the other handle to the binding
        self.listener.take();
    }
}
