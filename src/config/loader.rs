//! Configuration loading with layered precedence.
//!
//! The loader produces a fully populated [`Options`] from built-in defaults
//! and at most one JSON configuration file. The file is either named on the
//! command line or discovered by walking up from the working directory,
//! looking for `chime.config.json` and then `.chimerc` in each directory.
//! When the walk finds nothing, the per-user locations known to
//! `ortho_config`'s discovery builder are tried (`CHIME_CONFIG_PATH`,
//! `~/.chimerc`, the XDG config directory).
//!
//! Configuration problems never abort a run. A missing, unreadable or
//! malformed file is reported as a warning and the defaults are used instead.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use ortho_config::discovery::ConfigDiscovery;
use tracing::{debug, warn};

use crate::config::{Options, PartialOptions, default_sound_file};
use crate::error::ConfigError;
use crate::paths::{PathResolver, absolute, current_dir};
use crate::platform::Platform;

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "chime.config.json";

/// Dotfile alias for the configuration file.
pub const DOTFILE_NAME: &str = ".chimerc";

/// Environment variable naming a configuration file for discovery.
pub const CONFIG_PATH_ENV: &str = "CHIME_CONFIG_PATH";

/// Returns the built-in default options for this platform.
///
/// The sound file is the first system sound found on disk, or empty.
#[must_use]
pub fn default_options() -> Options {
    Options {
        sound_file: default_sound_file(Platform::current(), Utf8Path::is_file),
        ..Options::default()
    }
}

/// Loads [`Options`] from defaults and an optional configuration file.
///
/// # Type Parameters
///
/// * `E` - An environment provider implementing the `mockable::Env` trait,
///   used for home directory expansion of paths.
pub struct ConfigLoader<'a, E: mockable::Env> {
    resolver: PathResolver<'a, E>,
    defaults: Options,
    start_dir: Option<Utf8PathBuf>,
}

impl<'a, E: mockable::Env> ConfigLoader<'a, E> {
    /// Creates a loader using the platform defaults and the current
    /// working directory as the discovery starting point.
    #[must_use]
    pub fn new(env: &'a E) -> Self {
        Self {
            resolver: PathResolver::new(env),
            defaults: default_options(),
            start_dir: None,
        }
    }

    /// Replaces the built-in defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: Options) -> Self {
        self.defaults = defaults;
        self
    }

    /// Starts configuration discovery from `dir` instead of the current
    /// working directory.
    #[must_use]
    pub fn with_start_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    /// Returns the path resolver used for `~` expansion.
    #[must_use]
    pub const fn resolver(&self) -> &PathResolver<'a, E> {
        &self.resolver
    }

    /// Loads the configuration.
    ///
    /// With a non-empty `explicit_path`, only that file is considered;
    /// otherwise, including for an empty path, a file is discovered. Any
    /// `soundFile` in the file is resolved relative to the file's directory
    /// before the file is merged over the defaults.
    #[must_use]
    pub fn load(&self, explicit_path: Option<&Utf8Path>) -> Options {
        let config_path = match explicit_path {
            Some(path) if !path.as_str().is_empty() => {
                let resolved = Utf8PathBuf::from(self.resolver.resolve(path.as_str(), None));
                if !resolved.is_file() {
                    warn!(
                        "{}; using default configuration",
                        ConfigError::FileNotFound { path: resolved }
                    );
                    return self.defaults.clone();
                }
                resolved
            }
            _ => match self.discover() {
                Some(path) => path,
                None => {
                    debug!("no configuration file found; using defaults");
                    return self.defaults.clone();
                }
            },
        };

        match read_layer(&config_path) {
            Ok(layer) => self.apply_file_layer(&config_path, layer),
            Err(error) => {
                warn!("{error}; using default configuration");
                self.defaults.clone()
            }
        }
    }

    /// Finds the nearest configuration file, falling back to per-user
    /// locations.
    #[must_use]
    pub fn discover(&self) -> Option<Utf8PathBuf> {
        self.start_dir
            .clone()
            .or_else(current_dir)
            .and_then(|start| find_in_ancestors(&start))
            .or_else(find_user_config)
    }

    fn apply_file_layer(&self, path: &Utf8Path, mut layer: PartialOptions) -> Options {
        let base_dir = path.parent().and_then(absolute);
        layer.sound_file = layer
            .sound_file
            .take()
            .map(|sound_file| self.resolver.resolve(&sound_file, base_dir.as_deref()));

        debug!(%path, ?layer, "loaded configuration file");
        self.defaults.clone().merge(layer)
    }
}

/// Walks from `start` to the filesystem root looking for a configuration
/// file. Within one directory the conventional name beats the dotfile.
fn find_in_ancestors(start: &Utf8Path) -> Option<Utf8PathBuf> {
    start
        .ancestors()
        .flat_map(|dir| [CONFIG_FILE_NAME, DOTFILE_NAME].map(|name| dir.join(name)))
        .find(|candidate| candidate.is_file())
}

/// Looks in the per-user configuration locations.
fn find_user_config() -> Option<Utf8PathBuf> {
    let discovery = ConfigDiscovery::builder("chime")
        .env_var(CONFIG_PATH_ENV)
        .config_file_name("config.json")
        .dotfile_name(DOTFILE_NAME)
        .build();
    discovery
        .candidates()
        .into_iter()
        .filter(|p| p.is_file())
        .find_map(|p| Utf8PathBuf::try_from(p).ok())
}

/// Reads and parses one configuration file into a layer.
///
/// Uses `cap_std::fs_utf8` for capability-oriented filesystem access: the
/// parent directory is opened and the file is read from there.
fn read_layer(path: &Utf8Path) -> Result<PartialOptions, ConfigError> {
    let current = Utf8PathBuf::from(".");
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or(current.as_path());
    let file_name = path.file_name().unwrap_or(path.as_str());

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
        ConfigError::ReadFailed {
            path: path.to_owned(),
            message: format!("failed to open directory {parent}: {e}"),
        }
    })?;

    let content = dir
        .read_to_string(file_name)
        .map_err(|e| ConfigError::ReadFailed {
            path: path.to_owned(),
            message: e.to_string(),
        })?;

    serde_json::from_str::<PartialOptions>(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_owned(),
        message: e.to_string(),
    })
}
