//! Command-line overrides and final validation.
//!
//! The loaded configuration already contains defaults and file values; this
//! module layers the command-line overrides on top, re-anchors a sound file
//! given on the command line to the invocation directory, and repairs an
//! out-of-range volume.

use tracing::{debug, warn};

use crate::config::{DEFAULT_VOLUME, Options, PartialOptions};
use crate::error::ConfigError;
use crate::paths::PathResolver;

/// Checks that `volume`, when present, lies within `0.0..=1.0`.
///
/// NaN is rejected along with every other value outside the range.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` naming the offending value.
pub fn validate_volume(volume: Option<f64>) -> Result<Option<f64>, ConfigError> {
    match volume {
        Some(value) if !(0.0..=1.0).contains(&value) => Err(ConfigError::InvalidValue {
            field: String::from("volume"),
            reason: format!("{value} is outside 0.0..=1.0"),
        }),
        _ => Ok(volume),
    }
}

/// Returns `volume` unchanged when valid, otherwise warns and substitutes
/// [`DEFAULT_VOLUME`].
#[must_use]
pub fn sanitise_volume(volume: Option<f64>) -> Option<f64> {
    validate_volume(volume).unwrap_or_else(|error| {
        warn!("{error}; using {DEFAULT_VOLUME}");
        Some(DEFAULT_VOLUME)
    })
}

/// Parses a `--volume` argument.
///
/// Unparseable input becomes NaN so that it is reported and replaced by the
/// volume validation rather than rejected outright. The whole argument must
/// be a number: trailing text such as `0.5abc` is unparseable, not read as
/// its leading `0.5`.
#[must_use]
pub fn parse_volume(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Merges command-line `overrides` onto the loaded `config`.
///
/// Every field present in `overrides` wins; absent ones keep the loaded
/// value. A sound file supplied on the command line is resolved against the
/// current working directory, never the configuration file's directory.
/// The merged volume is validated last.
pub fn resolve_options<E: mockable::Env>(
    resolver: &PathResolver<'_, E>,
    config: Options,
    overrides: PartialOptions,
) -> Options {
    let sound_file_overridden = overrides.sound_file.is_some();
    let mut options = config.merge(overrides);

    if sound_file_overridden {
        options.sound_file = resolver.resolve(&options.sound_file, None);
    }
    options.volume = sanitise_volume(options.volume);

    debug!(?options, "resolved options");
    options
}
