use serde::{Deserialize, Serialize};

/// Contains Config properties which will be used by the Synchronizer
///
/// Field names deserialize in camelCase so a JavaScript host can hand over
/// `{ pushUpdatedStateToHistory: false }` directly; omitted fields keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncConfig {
    /// Write keys whose value is null/absent as `key=` instead of skipping
    /// them.
    pub serialize_empty_values: bool,
    /// After the first write, every state change pushes a new history entry.
    /// When false, the current entry is always replaced.
    pub push_updated_state_to_history: bool,
    /// Re-parse the address whenever the host reports an external change to
    /// it, not only once at attach time.
    #[serde(alias = "observeLocationSearchChanges")]
    pub observe_external_address_changes: bool,
    /// Emit `debug` records for every parse, navigation and write decision.
    pub debug: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            serialize_empty_values: false,
            push_updated_state_to_history: true,
            observe_external_address_changes: false,
            debug: false,
        }
    }
}
