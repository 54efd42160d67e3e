/// REGRESSION TEST: non-finite numbers in the history sub-slot
///
/// THE BUG: `NaN`, `Infinity` and `-Infinity` were written to the address
/// as text but stored in the entry's sub-slot as JSON `null`. Navigating back
/// to such an entry reported `{}`, and re-applying the identical state pushed
/// a fresh entry, destroying the forward history.
///
/// THE FIX: non-finite numbers are stored as their query text, and stored
/// values are compared in that same JSON form.

use search_state_shared::{
    CallerState, SearchState, StateValue, SyncConfig, Synchronizer, WriteOutcome,
};
use search_state_test::MemoryHistory;

fn attached() -> Synchronizer<MemoryHistory> {
    Synchronizer::attach(MemoryHistory::new(""), SyncConfig::default()).0
}

#[test]
fn back_to_nan_entry_reports_nan() {
    let mut sync = attached();
    sync.state_changed(&CallerState::new().with("a", f64::NAN)).unwrap();
    sync.state_changed(&CallerState::new().with("a", 1)).unwrap();

    let arrived = sync.backend_mut().back().unwrap();
    assert_eq!(sync.backend().current().query, "?a=NaN");
    let report = sync.navigated(&arrived);
    assert_eq!(report, SearchState::new().with("a", "NaN"));

    // caller adopts the report as text
    let adopted = CallerState::new().with("a", StateValue::from(report.get("a").unwrap()));
    assert_eq!(sync.state_changed(&adopted).unwrap(), WriteOutcome::Unchanged);
    assert_eq!(sync.backend().len(), 2);
    assert_eq!(sync.backend().index(), 0);
}

#[test]
fn reapplying_infinity_after_navigation_is_unchanged() {
    for number in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let mut sync = attached();
        let state = CallerState::new().with("a", number);
        sync.state_changed(&state).unwrap();
        sync.state_changed(&CallerState::new().with("a", 1)).unwrap();

        let arrived = sync.backend_mut().back().unwrap();
        sync.navigated(&arrived);

        assert_eq!(
            sync.state_changed(&state).unwrap(),
            WriteOutcome::Unchanged,
            "{} pushed again",
            number
        );
        assert_eq!(sync.backend().len(), 2);
    }
}
