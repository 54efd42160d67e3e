//! # Search State Shared
//! Engine that keeps a caller-held flat key/value state synchronized with the
//! location query string and the session history stack.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod constants;
mod history;
mod query;
mod state;
mod sync;

pub use constants::HISTORY_STATE_KEY;
pub use history::{
    backend::HistoryBackend,
    bag::{merge_sub_slot, read_sub_slot, HistoryBag},
    error::HistoryError,
};
pub use query::{encode_query, normalize_query, parse_query};
pub use state::{CallerState, SearchState, StateValue};
pub use sync::{SyncConfig, Synchronizer, WriteOutcome};
