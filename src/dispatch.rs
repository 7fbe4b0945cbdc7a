//! Concurrent fan-out to the notification channels.
//!
//! The dispatcher decides which channels take part in a run, starts them all
//! at once and waits for every one of them to settle. Failures never cancel
//! sibling channels: each channel resolves to an optional error string and
//! the dispatcher only collects them.

use futures_util::future::OptionFuture;
use tracing::{debug, info};

use crate::config::Options;
use crate::notify::{
    Channel, DesktopNotifier, SoundPlayer, Speaker, SystemNotifier, SystemSoundPlayer,
    SystemSpeaker, notify_desktop, notify_sound, notify_voice,
};

/// The channels selected for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelPlan {
    /// Whether the sound channel runs.
    pub sound: bool,
    /// Whether the voice channel runs.
    pub voice: bool,
    /// Whether the desktop channel runs.
    pub desktop: bool,
}

impl ChannelPlan {
    /// Selects channels from resolved options.
    ///
    /// A desktop notification is always accompanied by the sound cue, so the
    /// sound channel runs when either `sound` or `desktop` is set.
    #[must_use]
    pub const fn from_options(options: &Options) -> Self {
        Self {
            sound: options.sound || options.desktop,
            voice: options.voice,
            desktop: options.desktop,
        }
    }

    /// Returns the selected channels in dispatch order.
    #[must_use]
    pub fn channels(&self) -> Vec<Channel> {
        [
            (self.sound, Channel::Sound),
            (self.voice, Channel::Voice),
            (self.desktop, Channel::Desktop),
        ]
        .into_iter()
        .filter_map(|(selected, channel)| selected.then_some(channel))
        .collect()
    }

    /// Returns `true` when no channel is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.sound || self.voice || self.desktop)
    }
}

/// Runs the selected notification channels concurrently.
///
/// # Type Parameters
///
/// * `P` - Sound playback collaborator.
/// * `S` - Text-to-speech collaborator.
/// * `N` - Desktop notification collaborator.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<P, S, N> {
    player: P,
    speaker: S,
    notifier: N,
}

/// Dispatcher wired to the host's players, synthesiser and notification
/// service.
pub type SystemDispatcher = Dispatcher<SystemSoundPlayer, SystemSpeaker, SystemNotifier>;

impl SystemDispatcher {
    /// Creates a dispatcher that talks to the host.
    #[must_use]
    pub const fn system() -> Self {
        Self::new(SystemSoundPlayer, SystemSpeaker, SystemNotifier)
    }
}

impl<P, S, N> Dispatcher<P, S, N>
where
    P: SoundPlayer + Sync,
    S: Speaker + Sync,
    N: DesktopNotifier + Sync,
{
    /// Creates a dispatcher from its channel collaborators.
    #[must_use]
    pub const fn new(player: P, speaker: S, notifier: N) -> Self {
        Self {
            player,
            speaker,
            notifier,
        }
    }

    /// Runs every selected channel and collects their error strings.
    ///
    /// All selected channels are started together and awaited to
    /// completion, whatever the individual outcomes. Errors are returned in
    /// channel order (sound, voice, desktop); an empty list means every
    /// selected channel succeeded.
    pub async fn dispatch(&self, options: &Options) -> Vec<String> {
        let plan = ChannelPlan::from_options(options);
        if plan.is_empty() {
            info!("no notification channels enabled");
            return Vec::new();
        }
        debug!(channels = ?plan.channels(), "dispatching notification");

        let sound: OptionFuture<_> = plan
            .sound
            .then(|| notify_sound(&self.player, options))
            .into();
        let voice: OptionFuture<_> = plan
            .voice
            .then(|| notify_voice(&self.speaker, options))
            .into();
        let desktop: OptionFuture<_> = plan
            .desktop
            .then(|| notify_desktop(&self.notifier, options))
            .into();

        let (sound_error, voice_error, desktop_error) = tokio::join!(sound, voice, desktop);

        [sound_error, voice_error, desktop_error]
            .into_iter()
            .flatten()
            .flatten()
            .filter(|error| !error.is_empty())
            .collect()
    }
}
