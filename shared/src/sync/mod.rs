//! # Search-state sync engine – Overview
//!
//! Keeps a caller-held flat key/value state and the location query string
//! (plus the session history stack behind it) in step, in both directions.
//!
//! ## Data flow
//! 1. **Inbound** – at attach time, and on external address changes when so
//!    configured, the query string is decoded into a [`SearchState`] and
//!    reported to the caller.
//! 2. **Navigation** – on back/forward the arrived entry's private slot is
//!    reported as the new authoritative state.
//! 3. **Outbound** – every caller state change is serialized and written
//!    with `replaceState` (first write, or pushes disabled) or `pushState`.
//!
//! ## Guarantees
//! * A write never feeds back into the inbound path as if it were new input.
//! * The first write never creates a navigable step.
//! * Writes merge into the entry's bag; keys owned by other code survive.
//!
//! ## Reading map
//! | Module | Role |
//! |--------|------|
//! | [`synchronizer.rs`]  | the three procedures and their markers |
//! | [`config.rs`]        | behaviour switches |
//! | [`write_outcome.rs`] | result of an outbound pass |
//!
//! [`SearchState`]: crate::SearchState

mod config;
mod synchronizer;
mod write_outcome;

pub use config::SyncConfig;
pub use synchronizer::Synchronizer;
pub use write_outcome::WriteOutcome;

#[cfg(test)]
pub mod tests;
