//! # `Synchronizer` – address ⇄ state bookkeeping
//!
//! One `Synchronizer` lives for exactly one attachment. It owns the history
//! backend and four markers:
//!
//! | Field | Purpose |
//! |-------|---------|
//! | `last_written_query` | Query this instance wrote most recently; lets a self-caused address change be told apart from an external one. Cleared on navigation. |
//! | `last_parsed_query`  | Address the parser last reported; the same external address is reported once. Cleared by writes and navigation. |
//! | `has_parsed_once`    | Set by the first inbound parse; until then outbound passes are `Pending`. |
//! | `has_written_once`   | Set by the first history write; the first write always replaces. |
//!
//! ## Triggers
//! 1. [`Synchronizer::attach`] – parses the address and returns the initial report
//!    (or [`Synchronizer::new`] followed by [`Synchronizer::parse_address`]).
//! 2. [`Synchronizer::address_changed`] – re-parses, when observing external changes.
//! 3. [`Synchronizer::navigated`] – reports the arrived entry's recorded state.
//! 4. [`Synchronizer::state_changed`] – decides between replace, push and no-op.
//!
//! Triggers are never re-entered; the host serializes them on its event loop.

use log::debug;
use serde_json::Value;

use crate::{
    history::bag::{merge_sub_slot, read_sub_slot},
    query::normalize_query,
    CallerState, HistoryBackend, HistoryBag, HistoryError, SearchState, SyncConfig, WriteOutcome,
};

pub struct Synchronizer<B: HistoryBackend> {
    backend: B,
    config: SyncConfig,
    last_written_query: Option<String>,
    last_parsed_query: Option<String>,
    has_parsed_once: bool,
    has_written_once: bool,
}

impl<B: HistoryBackend> Synchronizer<B> {
    /// Creates an instance that has not looked at the address yet. Outbound
    /// passes stay `Pending` until [`Synchronizer::parse_address`] runs.
    pub fn new(backend: B, config: SyncConfig) -> Self {
        Self {
            backend,
            config,
            last_written_query: None,
            last_parsed_query: None,
            has_parsed_once: false,
            has_written_once: false,
        }
    }

    /// Takes ownership of `backend` and runs the first inbound parse. The
    /// returned report is the address's state at attach time.
    pub fn attach(backend: B, config: SyncConfig) -> (Self, SearchState) {
        let mut sync = Self::new(backend, config);
        // nothing has been written yet, so this pass cannot be deduped
        let initial = sync.parse_address().unwrap_or_default();
        (sync, initial)
    }

    /// Ends the attachment and hands the backend back.
    pub fn detach(self) -> B {
        self.backend
    }

    /// Host hook for "the address changed, possibly not because of us".
    /// Returns a report only when observing external changes and the address
    /// is not the one this instance last wrote.
    pub fn address_changed(&mut self) -> Option<SearchState> {
        if !self.config.observe_external_address_changes {
            return None;
        }
        self.parse_address()
    }

    /// Host hook for a history position change. Reports what the arrived
    /// entry recorded in its private slot (empty when it recorded nothing).
    pub fn navigated(&mut self, arrived: &HistoryBag) -> SearchState {
        let report = read_sub_slot(arrived)
            .map(report_from_sub_slot)
            .unwrap_or_default();
        if self.config.debug {
            debug!("navigated, arrived entry holds {:?}", report);
        }
        // the live address now belongs to an entry this pass did not write
        self.last_written_query = None;
        self.last_parsed_query = None;
        report
    }

    /// Host hook for "the caller's state changed". Writes the state into the
    /// address and history if, and how, the rules call for it.
    pub fn state_changed(&mut self, state: &CallerState) -> Result<WriteOutcome, HistoryError> {
        if !self.has_parsed_once {
            return Ok(WriteOutcome::Pending);
        }

        let new_query = state.to_query(self.config.serialize_empty_values);
        let live_query = normalize_query(&self.backend.query());
        let live_bag = self.backend.entry_state();

        if self.config.debug {
            debug!(
                "state changed: state={:?} new_query={} last_written={:?} live_query={}",
                state, new_query, self.last_written_query, live_query
            );
        }

        if self.last_written_query.as_deref() == Some(new_query.as_str()) {
            return Ok(WriteOutcome::Unchanged);
        }

        let merged_bag = merge_sub_slot(&live_bag, state.to_json());

        if !self.has_written_once || !self.config.push_updated_state_to_history {
            if self.config.debug {
                debug!("replaceState {}", new_query);
            }
            self.backend.replace_entry(&new_query, merged_bag)?;
            self.has_written_once = true;
            self.last_written_query = Some(new_query);
            self.last_parsed_query = None;
            return Ok(WriteOutcome::Replaced);
        }

        let stored = read_sub_slot(&live_bag)
            .map(CallerState::from_json)
            .unwrap_or_default();
        if new_query == live_query && state.stored_eq(&stored) {
            return Ok(WriteOutcome::Unchanged);
        }

        if self.config.debug {
            debug!("pushState {}", new_query);
        }
        self.backend.push_entry(&new_query, merged_bag)?;
        self.last_written_query = Some(new_query);
        self.last_parsed_query = None;
        Ok(WriteOutcome::Pushed)
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn last_written_query(&self) -> Option<&str> {
        self.last_written_query.as_deref()
    }

    pub fn has_parsed_once(&self) -> bool {
        self.has_parsed_once
    }

    pub fn has_written_once(&self) -> bool {
        self.has_written_once
    }

    /// Inbound parser. Decodes the live address, unless it is exactly what
    /// this instance last wrote or last reported, in which case there is
    /// nothing new to report.
    pub fn parse_address(&mut self) -> Option<SearchState> {
        let query = normalize_query(&self.backend.query());
        // whatever happens below, the writer is unblocked from here on
        self.has_parsed_once = true;

        if self.last_written_query.as_deref() == Some(query.as_str())
            || self.last_parsed_query.as_deref() == Some(query.as_str())
        {
            return None;
        }

        let search = SearchState::from_query(&query);
        self.last_parsed_query = Some(query);
        if self.config.debug {
            debug!("parsed state from location search {:?}", search);
        }
        Some(search)
    }
}

fn report_from_sub_slot(sub_slot: &Value) -> SearchState {
    CallerState::from_json(sub_slot)
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key, value.to_query_text()))
        .collect()
}
