/// What a single outbound pass did with the caller's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The address has not been parsed yet; nothing may be written.
    Pending,
    /// Nothing differs from what is already recorded; no history call made.
    Unchanged,
    /// The current entry was overwritten in place.
    Replaced,
    /// A new entry was appended.
    Pushed,
}

impl WriteOutcome {
    pub fn is_write(&self) -> bool {
        matches!(self, WriteOutcome::Replaced | WriteOutcome::Pushed)
    }
}
