/// INTEGRATION: the first write after attaching
///
/// Applying the caller's initial state to the page the user is already on
/// must not create a step the back button can reach.

use search_state_shared::{CallerState, SearchState, SyncConfig, Synchronizer, WriteOutcome};
use search_state_test::MemoryHistory;

#[test]
fn first_write_is_a_replace() {
    let (mut sync, initial) = Synchronizer::attach(MemoryHistory::new(""), SyncConfig::default());
    assert!(initial.is_empty());

    let outcome = sync
        .state_changed(&CallerState::new().with("q", "rust").with("page", 1))
        .unwrap();

    assert_eq!(outcome, WriteOutcome::Replaced);
    let history = sync.backend();
    assert_eq!(history.len(), 1);
    assert_eq!(history.replace_count(), 1);
    assert_eq!(history.push_count(), 0);
    assert_eq!(history.current().query, "?page=1&q=rust");
}

#[test]
fn deep_link_is_reported_then_confirmed_in_place() {
    let (mut sync, initial) =
        Synchronizer::attach(MemoryHistory::new("?page=4&q=crab"), SyncConfig::default());
    assert_eq!(initial, SearchState::new().with("page", "4").with("q", "crab"));

    // caller adopts the deep link as its state
    let state = CallerState::new().with("page", 4).with("q", "crab");
    assert_eq!(sync.state_changed(&state).unwrap(), WriteOutcome::Replaced);
    assert_eq!(sync.backend().len(), 1);
    assert_eq!(sync.backend().current().query, "?page=4&q=crab");

    assert_eq!(sync.state_changed(&state).unwrap(), WriteOutcome::Unchanged);
    assert_eq!(sync.backend().replace_count(), 1);
}

#[test]
fn empty_initial_state_still_records_sub_slot() {
    let (mut sync, _) = Synchronizer::attach(MemoryHistory::new(""), SyncConfig::default());
    sync.state_changed(&CallerState::new()).unwrap();
    let history = sync.backend();
    assert_eq!(history.current().query, "?");
    assert!(search_state_shared::read_sub_slot(&history.current().state).is_some());
}
