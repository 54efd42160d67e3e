/// Key of this crate's private slot inside every history entry's data bag.
/// Namespaced so it cannot collide with state stored by routers or other code.
pub const HISTORY_STATE_KEY: &str = "__search_state__synchronizer";
