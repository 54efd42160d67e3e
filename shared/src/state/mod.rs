mod caller_state;
mod search_state;
mod state_value;

pub use caller_state::CallerState;
pub use search_state::SearchState;
pub use state_value::StateValue;
