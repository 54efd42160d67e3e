
use serde_json::Value;

use crate::{HistoryBackend, HistoryBag, HistoryError};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Replace(String, Value),
    Push(String, Value),
}

/// Single-entry backend that records every navigation call.
pub(crate) struct RecordingBackend {
    pub query: String,
    pub state: HistoryBag,
    pub calls: Vec<Call>,
    pub reject_writes: bool,
}

impl RecordingBackend {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            state: Value::Null,
            calls: Vec::new(),
            reject_writes: false,
        }
    }

    pub fn pushes(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::Push(..)))
            .count()
    }

    pub fn replaces(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::Replace(..)))
            .count()
    }
}

impl HistoryBackend for RecordingBackend {
    fn query(&self) -> String {
        self.query.clone()
    }

    fn entry_state(&self) -> HistoryBag {
        self.state.clone()
    }

    fn replace_entry(&mut self, query: &str, state: HistoryBag) -> Result<(), HistoryError> {
        if self.reject_writes {
            return Err(HistoryError::ReplaceRejected {
                query: query.to_string(),
                reason: "SecurityError".to_string(),
            });
        }
        self.calls.push(Call::Replace(query.to_string(), state.clone()));
        self.query = query.to_string();
        self.state = state;
        Ok(())
    }

    fn push_entry(&mut self, query: &str, state: HistoryBag) -> Result<(), HistoryError> {
        if self.reject_writes {
            return Err(HistoryError::PushRejected {
                query: query.to_string(),
                reason: "SecurityError".to_string(),
            });
        }
        self.calls.push(Call::Push(query.to_string(), state.clone()));
        self.query = query.to_string();
        self.state = state;
        Ok(())
    }
}
