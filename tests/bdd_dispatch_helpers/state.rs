//! Scenario state for notification dispatch behavioural tests.

use chime::api::RunOutcome;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

#[derive(Default, ScenarioState)]
pub(crate) struct DispatchState {
    /// JSON written to the configuration file, if any.
    pub(crate) config_json: Slot<String>,
    /// Command-line arguments after the program name.
    pub(crate) args: Slot<Vec<String>>,
    /// Channels whose collaborator reports a failure.
    pub(crate) failing: Slot<Vec<String>>,
    /// Channels whose collaborator was called, in dispatch order.
    pub(crate) invoked: Slot<Vec<String>>,
    /// Outcome of the run.
    pub(crate) outcome: Slot<RunOutcome>,
}

#[fixture]
pub(crate) fn dispatch_state() -> DispatchState {
    let state = DispatchState::default();
    state.args.set(Vec::new());
    state.failing.set(Vec::new());
    state
}
