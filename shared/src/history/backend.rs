use crate::{HistoryBag, HistoryError};

/// The browser surface the synchronizer needs: the live query string, the
/// live entry's data bag, and the two navigation primitives.
///
/// Implementations write the bag exactly as given; merging with sibling keys
/// has already happened by the time `replace_entry`/`push_entry` is called.
pub trait HistoryBackend {
    /// Current location query, `"?..."`, or `""` when there is none.
    fn query(&self) -> String;

    /// Data bag of the current history entry. `Value::Null` when unset.
    fn entry_state(&self) -> HistoryBag;

    /// Overwrites the current entry's query and bag without growing the stack.
    fn replace_entry(&mut self, query: &str, state: HistoryBag) -> Result<(), HistoryError>;

    /// Appends a new entry after the current one.
    fn push_entry(&mut self, query: &str, state: HistoryBag) -> Result<(), HistoryError>;
}

impl<B: HistoryBackend + ?Sized> HistoryBackend for Box<B> {
    fn query(&self) -> String {
        (**self).query()
    }

    fn entry_state(&self) -> HistoryBag {
        (**self).entry_state()
    }

    fn replace_entry(&mut self, query: &str, state: HistoryBag) -> Result<(), HistoryError> {
        (**self).replace_entry(query, state)
    }

    fn push_entry(&mut self, query: &str, state: HistoryBag) -> Result<(), HistoryError> {
        (**self).push_entry(query, state)
    }
}
