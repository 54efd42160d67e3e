//! # Search State Client
//! Hands the search-state engine's reports to a caller callback and, on
//! `wasm32` with the `wbindgen` feature, drives it from the browser window.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

cfg_if! {
    if #[cfg(all(target_arch = "wasm32", not(feature = "wbindgen")))]
    {
        compile_error!("wasm target for 'search_state_client' crate requires the 'wbindgen' feature to be enabled.");
    }
    else if #[cfg(all(target_arch = "wasm32", feature = "wbindgen"))]
    {
        mod backends;
        pub use backends::*;
    }
}

mod binding;

pub use binding::SearchStateBinding;

pub use search_state_shared::{
    CallerState, HistoryBackend, HistoryBag, HistoryError, SearchState, StateValue, SyncConfig,
    Synchronizer, WriteOutcome, HISTORY_STATE_KEY,
};
