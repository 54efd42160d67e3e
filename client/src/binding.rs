use std::{cell::RefCell, rc::Rc};

use log::warn;

use search_state_shared::{
    CallerState, HistoryBackend, HistoryBag, HistoryError, SearchState, SyncConfig, Synchronizer,
    WriteOutcome,
};

type SearchCallback = Box<dyn FnMut(&SearchState)>;

/// A [`Synchronizer`] wired to the caller's `on_search_changed` callback.
///
/// Clones share the same synchronizer and callback, which is how an event
/// listener and the caller can both hold the binding. Reports are delivered
/// after the synchronizer borrow is released, so the callback may call
/// [`SearchStateBinding::state_changed`] for the state it just received.
pub struct SearchStateBinding<B: HistoryBackend> {
    sync: Rc<RefCell<Synchronizer<B>>>,
    on_search_changed: Rc<RefCell<SearchCallback>>,
}

impl<B: HistoryBackend> SearchStateBinding<B> {
    /// Attaches to `backend` and immediately reports the address's state.
    pub fn attach(
        backend: B,
        config: SyncConfig,
        on_search_changed: impl FnMut(&SearchState) + 'static,
    ) -> Self {
        let (sync, initial) = Synchronizer::attach(backend, config);
        let binding = Self {
            sync: Rc::new(RefCell::new(sync)),
            on_search_changed: Rc::new(RefCell::new(Box::new(on_search_changed))),
        };
        binding.report(&initial);
        binding
    }

    /// Swaps the callback; later reports go to the new one.
    pub fn set_on_search_changed(&self, on_search_changed: impl FnMut(&SearchState) + 'static) {
        *self.on_search_changed.borrow_mut() = Box::new(on_search_changed);
    }

    pub fn state_changed(&self, state: &CallerState) -> Result<WriteOutcome, HistoryError> {
        self.sync.borrow_mut().state_changed(state)
    }

    /// Feeds a history position change. Always reports.
    pub fn navigated(&self, arrived: &HistoryBag) {
        let report = self.sync.borrow_mut().navigated(arrived);
        self.report(&report);
    }

    /// Feeds an external address change. Returns whether a report was made.
    pub fn address_changed(&self) -> bool {
        let report = self.sync.borrow_mut().address_changed();
        match report {
            Some(search) => {
                self.report(&search);
                true
            }
            None => false,
        }
    }

    pub fn config(&self) -> SyncConfig {
        self.sync.borrow().config().clone()
    }

    pub fn with_backend<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        f(self.sync.borrow_mut().backend_mut())
    }

    /// Ends the attachment. Returns the backend when this was the last handle.
    pub fn detach(self) -> Option<B> {
        let Self { sync, .. } = self;
        Rc::try_unwrap(sync)
            .ok()
            .map(|cell| cell.into_inner().detach())
    }

    fn report(&self, search: &SearchState) {
        match self.on_search_changed.try_borrow_mut() {
            Ok(mut callback) => (*callback)(search),
            Err(_) => warn!("on_search_changed re-entered while reporting, dropping {:?}", search),
        }
    }
}

impl<B: HistoryBackend> Clone for SearchStateBinding<B> {
    fn clone(&self) -> Self {
        Self {
            sync: self.sync.clone(),
            on_search_changed: self.on_search_changed.clone(),
        }
    }
}
