//! Text-to-speech channel.

use tracing::debug;

use super::{Channel, ChannelFuture, CommandSpec, Speaker};
use crate::config::Options;
use crate::error::NotifyError;
use crate::platform::Platform;

/// Speaks the configured message.
///
/// Does nothing when the message is empty. Returns `"Voice error: <cause>"`
/// when speech fails.
pub async fn notify_voice<S>(speaker: &S, options: &Options) -> Option<String>
where
    S: Speaker + ?Sized,
{
    let text = options.message_text();
    if text.is_empty() {
        debug!("empty message; skipping voice");
        return None;
    }

    match speaker.speak(text).await {
        Ok(()) => None,
        Err(e) => {
            debug!(channel = %Channel::Voice, error = %e, "channel failed");
            Some(format!("Voice error: {e}"))
        }
    }
}

/// Builds the speech command for `platform`.
#[must_use]
pub fn speech_command(platform: Platform, text: &str) -> CommandSpec {
    match platform {
        Platform::MacOs | Platform::Other => CommandSpec::new("say", vec![text.to_owned()]),
        Platform::Linux => {
            CommandSpec::new("espeak-ng", vec![String::from("--"), text.to_owned()])
        }
        Platform::Windows => {
            let quoted = text.replace('\'', "''");
            CommandSpec::new(
                "powershell",
                vec![
                    String::from("-NoProfile"),
                    String::from("-NonInteractive"),
                    String::from("-Command"),
                    format!(
                        "Add-Type -AssemblyName System.Speech; \
                         (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{quoted}')"
                    ),
                ],
            )
        }
    }
}

/// Speaks through the host's speech synthesiser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpeaker;

impl Speaker for SystemSpeaker {
    fn speak(&self, text: &str) -> ChannelFuture<'_> {
        let command = speech_command(Platform::current(), text);
        Box::pin(command.run(|message| NotifyError::SpeechFailed { message }))
    }
}
