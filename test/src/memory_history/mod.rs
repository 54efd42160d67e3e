/// In-memory session history for tests
/// Behaves like `window.history` + `location.search` without a browser

use serde_json::Value;

use search_state_shared::{HistoryBackend, HistoryBag, HistoryError};

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryEntry {
    pub query: String,
    pub state: HistoryBag,
}

pub struct MemoryHistory {
    entries: Vec<MemoryEntry>,
    index: usize,
    replace_count: usize,
    push_count: usize,
}

impl MemoryHistory {
    /// A stack with one entry at `query` (`""` for no query) and no state.
    pub fn new(query: &str) -> Self {
        Self::with_state(query, Value::Null)
    }

    pub fn with_state(query: &str, state: HistoryBag) -> Self {
        Self {
            entries: vec![MemoryEntry {
                query: query.to_string(),
                state,
            }],
            index: 0,
            replace_count: 0,
            push_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &MemoryEntry {
        &self.entries[self.index]
    }

    pub fn entries(&self) -> &[MemoryEntry] {
        &self.entries
    }

    pub fn replace_count(&self) -> usize {
        self.replace_count
    }

    pub fn push_count(&self) -> usize {
        self.push_count
    }

    /// Moves `delta` entries and returns the arrived entry's state, like a
    /// `popstate` event would carry. `None` when out of range.
    pub fn go(&mut self, delta: isize) -> Option<HistoryBag> {
        let target = self.index.checked_add_signed(delta)?;
        if target >= self.entries.len() || delta == 0 {
            return None;
        }
        self.index = target;
        Some(self.current().state.clone())
    }

    pub fn back(&mut self) -> Option<HistoryBag> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<HistoryBag> {
        self.go(1)
    }

    /// Another party (router, user script) rewrites the current entry.
    pub fn external_replace(&mut self, query: &str, state: HistoryBag) {
        let entry = &mut self.entries[self.index];
        entry.query = query.to_string();
        entry.state = state;
    }

    /// Another party pushes an entry.
    pub fn external_push(&mut self, query: &str, state: HistoryBag) {
        self.entries.truncate(self.index + 1);
        self.entries.push(MemoryEntry {
            query: query.to_string(),
            state,
        });
        self.index += 1;
    }
}

impl HistoryBackend for MemoryHistory {
    fn query(&self) -> String {
        self.current().query.clone()
    }

    fn entry_state(&self) -> HistoryBag {
        self.current().state.clone()
    }

    fn replace_entry(&mut self, query: &str, state: HistoryBag) -> Result<(), HistoryError> {
        self.external_replace(query, state);
        self.replace_count += 1;
        Ok(())
    }

    fn push_entry(&mut self, query: &str, state: HistoryBag) -> Result<(), HistoryError> {
        self.external_push(query, state);
        self.push_count += 1;
        Ok(())
    }
}
