//! Semantic error types for the chime application.
//!
//! Configuration problems are recoverable and only ever surface as
//! diagnostics, while notification failures are rendered into the strings the
//! dispatcher reports. Opaque errors (`eyre::Report`) are reserved for the
//! binary boundary.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file was not found at the expected path.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// The path where the configuration file was expected.
        path: Utf8PathBuf,
    },

    /// The configuration file exists but could not be read.
    #[error("failed to read configuration file {path}: {message}")]
    ReadFailed {
        /// The configuration file path.
        path: Utf8PathBuf,
        /// A description of the I/O failure.
        message: String,
    },

    /// The configuration file could not be parsed.
    #[error("failed to parse configuration file {path}: {message}")]
    ParseError {
        /// The configuration file path.
        path: Utf8PathBuf,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value failed validation.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// The name of the invalid field.
        field: String,
        /// The reason the value is invalid.
        reason: String,
    },
}

/// Errors raised by the notification channels.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The sound file to play does not exist.
    #[error("Sound file not found: {path}")]
    SoundFileNotFound {
        /// The resolved sound file path.
        path: String,
    },

    /// The sound player ran but reported a failure.
    #[error("{message}")]
    PlaybackFailed {
        /// A description of the playback failure.
        message: String,
    },

    /// Text-to-speech failed.
    #[error("{message}")]
    SpeechFailed {
        /// A description of the speech failure.
        message: String,
    },

    /// The desktop notification could not be shown.
    #[error("{message}")]
    DesktopFailed {
        /// A description of the notification failure.
        message: String,
    },

    /// A helper program could not be started.
    #[error("failed to start '{program}': {message}")]
    SpawnFailed {
        /// The program that failed to start.
        program: String,
        /// A description of the spawn failure.
        message: String,
    },
}
