//! Orchestration API for chime.
//!
//! [`notify`] runs the whole pipeline for one invocation: load the
//! configuration, apply the command-line overrides and dispatch to the
//! notification channels. It accepts library-owned types (not clap types)
//! and never prints or exits, so it serves the CLI adapter and library
//! embedders alike.

mod notify;

pub use notify::{NotifyParams, notify};

/// Outcome of a chime run.
///
/// The CLI adapter maps [`RunOutcome::Delivered`] to exit code 0 and
/// [`RunOutcome::Failed`] to exit code 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every selected channel succeeded (or nothing was selected).
    Delivered,
    /// At least one channel failed.
    Failed {
        /// One message per failed channel, in channel order.
        errors: Vec<String>,
    },
}

impl RunOutcome {
    /// Builds the outcome from the dispatcher's error list.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        if errors.is_empty() {
            Self::Delivered
        } else {
            Self::Failed { errors }
        }
    }

    /// Returns `true` when the run delivered without errors.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}
