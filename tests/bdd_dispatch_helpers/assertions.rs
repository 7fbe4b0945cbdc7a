//! Assertion helpers for notification dispatch behavioural tests.

use chime::api::RunOutcome;
use rstest_bdd_macros::then;

use super::StepResult;
use super::state::DispatchState;

fn outcome(dispatch_state: &DispatchState) -> StepResult<RunOutcome> {
    dispatch_state
        .outcome
        .get()
        .ok_or_else(|| String::from("outcome should be set"))
}

#[then("the invoked channels are {channels}")]
fn invoked_channels_are(dispatch_state: &DispatchState, channels: String) -> StepResult<()> {
    let invoked = dispatch_state
        .invoked
        .get()
        .ok_or_else(|| String::from("invoked channels should be recorded"))?;
    let expected: Vec<String> = if channels.trim() == "none" {
        Vec::new()
    } else {
        channels
            .split(',')
            .map(|channel| String::from(channel.trim()))
            .collect()
    };

    if invoked == expected {
        Ok(())
    } else {
        Err(format!("expected channels {expected:?}, got {invoked:?}"))
    }
}

#[then("the run succeeds")]
fn run_succeeds(dispatch_state: &DispatchState) -> StepResult<()> {
    match outcome(dispatch_state)? {
        RunOutcome::Delivered => Ok(()),
        RunOutcome::Failed { errors } => Err(format!("expected success, got errors {errors:?}")),
    }
}

#[then("the run fails with {count} error")]
fn run_fails_with_count(dispatch_state: &DispatchState, count: usize) -> StepResult<()> {
    match outcome(dispatch_state)? {
        RunOutcome::Failed { errors } if errors.len() == count => Ok(()),
        RunOutcome::Failed { errors } => {
            Err(format!("expected {count} errors, got {errors:?}"))
        }
        RunOutcome::Delivered => Err(format!("expected {count} errors, got success")),
    }
}

#[then("an error starts with {prefix}")]
fn error_starts_with(dispatch_state: &DispatchState, prefix: String) -> StepResult<()> {
    let RunOutcome::Failed { errors } = outcome(dispatch_state)? else {
        return Err(String::from("expected a failed run"));
    };
    if errors.iter().any(|error| error.starts_with(prefix.trim())) {
        Ok(())
    } else {
        Err(format!("no error starts with '{prefix}': {errors:?}"))
    }
}
