//! Notification channels.
//!
//! Each channel wraps one external collaborator behind a narrow trait:
//! [`SoundPlayer`] plays a file, [`Speaker`] speaks text and
//! [`DesktopNotifier`] raises a popup. The `notify_*` functions apply the
//! channel rules on top (skip empty input, check the sound file exists) and
//! turn any failure into the error string the dispatcher reports. They never
//! return an error themselves.
//!
//! The `System*` implementations talk to the host: sound and speech spawn the
//! platform's command-line tools, desktop notifications go through
//! `notify-rust`.

mod desktop;
mod process;
mod sound;
mod voice;

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::error::NotifyError;

pub use desktop::{NOTIFICATION_TITLE, SystemNotifier, notify_desktop};
pub use process::CommandSpec;
pub use sound::{SystemSoundPlayer, notify_sound, playback_command};
pub use voice::{SystemSpeaker, notify_voice, speech_command};

/// Future returned by the channel collaborators.
pub type ChannelFuture<'a> = Pin<Box<dyn Future<Output = Result<(), NotifyError>> + Send + 'a>>;

/// Plays sound files.
///
/// This abstraction keeps the sound channel testable without audio hardware.
pub trait SoundPlayer {
    /// Plays the file at `path` at `volume` (`0.0..=1.0`, player default when
    /// `None`) and resolves once playback has finished.
    fn play(&self, path: &str, volume: Option<f64>) -> ChannelFuture<'_>;
}

/// Speaks text aloud.
pub trait Speaker {
    /// Speaks `text` and resolves once speech has finished.
    fn speak(&self, text: &str) -> ChannelFuture<'_>;
}

/// Raises desktop notifications.
pub trait DesktopNotifier {
    /// Shows a notification with `title` and `message`.
    fn notify(&self, title: &str, message: &str) -> ChannelFuture<'_>;
}

/// The notification channels, in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Sound effect playback.
    Sound,
    /// Text-to-speech.
    Voice,
    /// Desktop popup.
    Desktop,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sound => "sound",
            Self::Voice => "voice",
            Self::Desktop => "desktop",
        };
        f.write_str(name)
    }
}
