use thiserror::Error;

/// Errors raised by a [`HistoryBackend`](crate::HistoryBackend) when a
/// navigation write cannot be carried out
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The host refused to overwrite the current entry
    #[error("Replacing the current history entry with query '{query}' was rejected: {reason}")]
    ReplaceRejected { query: String, reason: String },

    /// The host refused to append a new entry
    #[error("Pushing a new history entry with query '{query}' was rejected: {reason}")]
    PushRejected { query: String, reason: String },

    /// There is no window, location or history object to talk to
    #[error("Browser {what} is not available in this environment")]
    WindowUnavailable { what: &'static str },

    /// The history bag could not be converted to or from the host's representation
    #[error("History state could not be converted: {reason}")]
    StateConversion { reason: String },
}
