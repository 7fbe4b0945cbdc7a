//! Command-line argument definitions for chime.

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};

use super::{PartialOptions, parse_volume};

/// Command-line interface for chime.
///
/// Boolean channel flags are tri-state: absent leaves the configured value
/// alone, `--sound` enables the channel and `--sound=false` disables it.
#[derive(Debug, Default, Parser)]
#[command(name = "chime")]
#[command(
    author,
    version,
    about = "Play a sound, speak a message or raise a desktop notification",
    disable_version_flag = true
)]
pub struct Cli {
    /// Play sound effect.
    #[arg(
        short,
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub sound: Option<bool>,

    /// Enable text-to-speech.
    #[arg(
        short,
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub voice: Option<bool>,

    /// Show system notification.
    #[arg(
        short,
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub desktop: Option<bool>,

    /// Sound file path to play.
    #[arg(long = "soundFile", visible_alias = "sound-file", value_name = "PATH")]
    pub sound_file: Option<String>,

    /// Sound volume (0.0-1.0).
    #[arg(short = 'V', long, value_name = "VOLUME", allow_hyphen_values = true)]
    pub volume: Option<String>,

    /// Notification message text.
    #[arg(short, long)]
    pub message: Option<String>,

    /// Path to config file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    pub verbose: bool,

    /// Print version.
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    /// Returns the notification overrides given on the command line.
    ///
    /// `--config` and `--verbose` are not notification options and are
    /// left out.
    #[must_use]
    pub fn overrides(&self) -> PartialOptions {
        PartialOptions {
            sound: self.sound,
            sound_file: self.sound_file.clone(),
            volume: self.volume.as_deref().map(parse_volume),
            voice: self.voice,
            desktop: self.desktop,
            message: self.message.clone(),
        }
    }
}
