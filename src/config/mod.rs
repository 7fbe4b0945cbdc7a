//! Configuration system for chime.
//!
//! Options are resolved in three layers, lowest to highest precedence:
//! built-in defaults, a JSON configuration file, command-line arguments.
//! Each layer above the defaults is a [`PartialOptions`] whose absent fields
//! never overwrite the layer below.
//!
//! # Example Configuration
//!
//! ```json
//! {
//!   "sound": true,
//!   "soundFile": "./sounds/done.wav",
//!   "volume": 0.7,
//!   "voice": false,
//!   "desktop": true,
//!   "message": "Build finished"
//! }
//! ```

mod cli;
mod loader;
mod resolve;
mod sounds;
mod types;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use loader::{
    CONFIG_FILE_NAME, CONFIG_PATH_ENV, ConfigLoader, DOTFILE_NAME, default_options,
};
pub use resolve::{parse_volume, resolve_options, sanitise_volume, validate_volume};
pub use sounds::{default_sound_file, sound_candidates};
pub use types::{DEFAULT_VOLUME, Options, PartialOptions};
