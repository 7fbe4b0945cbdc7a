//! Sound effect channel.

use camino::Utf8Path;
use tracing::debug;

use super::{Channel, ChannelFuture, CommandSpec, SoundPlayer};
use crate::config::{Options, sanitise_volume};
use crate::error::NotifyError;
use crate::platform::Platform;

/// `paplay` volume corresponding to 100%.
const PAPLAY_FULL_VOLUME: f64 = 65536.0;

/// Plays the configured sound file.
///
/// Does nothing when no sound file is configured. Returns
/// `"Sound error: <cause>"` when the file is missing or playback fails.
pub async fn notify_sound<P>(player: &P, options: &Options) -> Option<String>
where
    P: SoundPlayer + ?Sized,
{
    match play_sound(player, options).await {
        Ok(()) => None,
        Err(e) => {
            debug!(channel = %Channel::Sound, error = %e, "channel failed");
            Some(format!("Sound error: {e}"))
        }
    }
}

async fn play_sound<P>(player: &P, options: &Options) -> Result<(), NotifyError>
where
    P: SoundPlayer + ?Sized,
{
    let path = options.sound_file.as_str();
    if path.is_empty() {
        debug!("no sound file configured; skipping sound");
        return Ok(());
    }
    if !Utf8Path::new(path).exists() {
        return Err(NotifyError::SoundFileNotFound {
            path: path.to_owned(),
        });
    }

    let volume = sanitise_volume(options.volume);
    player.play(path, volume).await
}

/// Builds the playback command for `platform`.
#[must_use]
pub fn playback_command(platform: Platform, path: &str, volume: Option<f64>) -> CommandSpec {
    match platform {
        Platform::MacOs | Platform::Other => {
            let mut args = Vec::new();
            if let Some(level) = volume {
                args.push(String::from("-v"));
                args.push(level.to_string());
            }
            args.push(path.to_owned());
            CommandSpec::new("afplay", args)
        }
        Platform::Linux => {
            let mut args = Vec::new();
            if let Some(level) = volume {
                args.push(format!("--volume={}", paplay_volume(level)));
            }
            args.push(path.to_owned());
            CommandSpec::new("paplay", args)
        }
        Platform::Windows => CommandSpec::new(
            "powershell",
            vec![
                String::from("-NoProfile"),
                String::from("-NonInteractive"),
                String::from("-Command"),
                windows_playback_script(path, volume),
            ],
        ),
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "volume is validated to 0.0..=1.0, so the scaled value fits in u32"
)]
fn paplay_volume(level: f64) -> u32 {
    (level.clamp(0.0, 1.0) * PAPLAY_FULL_VOLUME).round() as u32
}

fn windows_playback_script(path: &str, volume: Option<f64>) -> String {
    let quoted = path.replace('\'', "''");
    let volume_line = volume
        .map(|level| format!("$player.Volume = {level};"))
        .unwrap_or_default();
    format!(
        "Add-Type -AssemblyName presentationCore; \
         $player = New-Object System.Windows.Media.MediaPlayer; \
         $player.Open('{quoted}'); {volume_line} $player.Play(); \
         Start-Sleep -Seconds 1; \
         Start-Sleep -Seconds $player.NaturalDuration.TimeSpan.TotalSeconds; \
         Exit;"
    )
}

/// Plays sounds with the host's command-line player.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSoundPlayer;

impl SoundPlayer for SystemSoundPlayer {
    fn play(&self, path: &str, volume: Option<f64>) -> ChannelFuture<'_> {
        let command = playback_command(Platform::current(), path, volume);
        Box::pin(command.run(|message| NotifyError::PlaybackFailed { message }))
    }
}
