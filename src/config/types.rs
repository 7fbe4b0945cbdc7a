//! Configuration data types for chime.

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

/// Volume used when none is configured or the configured one is invalid.
pub const DEFAULT_VOLUME: f64 = 0.5;

/// Fully resolved notification options.
///
/// A fresh value is produced once per invocation by layering defaults, the
/// configuration file and command-line overrides. Channels only ever borrow
/// it.
#[derive(Debug, Clone, PartialEq, SmartDefault, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Play a sound effect.
    pub sound: bool,

    /// Sound file to play. Empty means no file is available.
    pub sound_file: String,

    /// Playback volume in `0.0..=1.0`.
    #[default(Some(DEFAULT_VOLUME))]
    pub volume: Option<f64>,

    /// Speak the message aloud.
    pub voice: bool,

    /// Show a desktop notification.
    pub desktop: bool,

    /// Notification message text.
    pub message: Option<String>,
}

/// A single, untrusted layer of options.
///
/// Every field is optional: `None` (or `null` in a configuration file) means
/// the layer does not mention the field, and merging it never overwrites a
/// value from a lower layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialOptions {
    /// Play a sound effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<bool>,

    /// Sound file to play.
    #[serde(alias = "sound_file", skip_serializing_if = "Option::is_none")]
    pub sound_file: Option<String>,

    /// Playback volume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,

    /// Speak the message aloud.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<bool>,

    /// Show a desktop notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop: Option<bool>,

    /// Notification message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PartialOptions {
    /// Returns whether the layer mentions no field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sound.is_none()
            && self.sound_file.is_none()
            && self.volume.is_none()
            && self.voice.is_none()
            && self.desktop.is_none()
            && self.message.is_none()
    }
}

impl Options {
    /// Layers `overrides` on top of `self`, field by field.
    ///
    /// Present override fields win, including `false`, `0.0` and `""`;
    /// absent ones keep the current value.
    #[must_use]
    pub fn merge(self, overrides: PartialOptions) -> Self {
        Self {
            sound: overrides.sound.unwrap_or(self.sound),
            sound_file: overrides.sound_file.unwrap_or(self.sound_file),
            volume: overrides.volume.or(self.volume),
            voice: overrides.voice.unwrap_or(self.voice),
            desktop: overrides.desktop.unwrap_or(self.desktop),
            message: overrides.message.or(self.message),
        }
    }

    /// Returns the message text, treating an absent message as empty.
    #[must_use]
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}
