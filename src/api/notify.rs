//! End-to-end notification orchestration.

use camino::Utf8Path;
use tracing::debug;

use crate::config::{ConfigLoader, PartialOptions, resolve_options};
use crate::dispatch::Dispatcher;
use crate::notify::{DesktopNotifier, SoundPlayer, Speaker};

use super::RunOutcome;

/// Parameters for a single notification run.
///
/// Groups the arguments required by [`notify`] into a single struct to
/// satisfy the "no more than four parameters" convention.
pub struct NotifyParams<'a, 'e, E: mockable::Env, P, S, N> {
    /// Loader providing defaults and the configuration file layer.
    pub loader: &'a ConfigLoader<'e, E>,
    /// Configuration file named on the command line, if any.
    pub config_path: Option<&'a Utf8Path>,
    /// Overrides given on the command line.
    pub overrides: PartialOptions,
    /// Dispatcher running the notification channels.
    pub dispatcher: &'a Dispatcher<P, S, N>,
}

/// Loads, resolves and dispatches one notification.
///
/// Configuration problems degrade to defaults with a warning, so the only
/// failures reported are channel errors, returned in
/// [`RunOutcome::Failed`].
pub async fn notify<E, P, S, N>(params: NotifyParams<'_, '_, E, P, S, N>) -> RunOutcome
where
    E: mockable::Env,
    P: SoundPlayer + Sync,
    S: Speaker + Sync,
    N: DesktopNotifier + Sync,
{
    let NotifyParams {
        loader,
        config_path,
        overrides,
        dispatcher,
    } = params;

    let loaded = loader.load(config_path);
    let options = resolve_options(loader.resolver(), loaded, overrides);
    let errors = dispatcher.dispatch(&options).await;
    debug!(error_count = errors.len(), "dispatch finished");

    RunOutcome::from_errors(errors)
}
