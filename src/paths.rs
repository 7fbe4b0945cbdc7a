//! Normalisation of user-supplied file paths.
//!
//! Sound file paths arrive from the command line and from configuration files
//! in whatever shape the user typed them. [`PathResolver`] expands a leading
//! tilde and anchors relative paths to a base directory (or the current
//! working directory). Resolution never fails: if anything goes wrong the
//! caller gets the original string back.

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Environment variables consulted, in order, for the home directory.
const HOME_VARS: &[&str] = &["HOME", "USERPROFILE"];

/// Resolves user-supplied paths against the home and working directories.
///
/// # Type Parameters
///
/// * `E` - An environment provider implementing the `mockable::Env` trait,
///   used to look up the home directory.
///
/// # Example
///
/// ```ignore
/// use mockable::DefaultEnv;
/// use chime::paths::PathResolver;
///
/// let env = DefaultEnv::new();
/// let resolver = PathResolver::new(&env);
/// let sound = resolver.resolve("~/sounds/done.wav", None);
/// ```
pub struct PathResolver<'a, E: mockable::Env> {
    env: &'a E,
}

impl<'a, E: mockable::Env> PathResolver<'a, E> {
    /// Creates a new path resolver with the given environment provider.
    #[must_use]
    pub const fn new(env: &'a E) -> Self {
        Self { env }
    }

    /// Returns the user's home directory, if the environment names one.
    #[must_use]
    pub fn home_dir(&self) -> Option<Utf8PathBuf> {
        HOME_VARS
            .iter()
            .filter_map(|var_name| self.env.string(var_name))
            .find(|value| !value.is_empty())
            .map(Utf8PathBuf::from)
    }

    /// Resolves `path` to an absolute path.
    ///
    /// - Empty input is returned unchanged.
    /// - `~` and a leading `~/` are expanded to the home directory; a tilde
    ///   anywhere else is left alone.
    /// - Absolute paths are returned as they are.
    /// - Relative paths are joined to `base_dir` (or the current working
    ///   directory when `base_dir` is `None`) and lexically normalised.
    ///
    /// If the home or working directory cannot be determined, the original
    /// input is returned.
    #[must_use]
    pub fn resolve(&self, path: &str, base_dir: Option<&Utf8Path>) -> String {
        if path.is_empty() {
            return path.to_owned();
        }
        self.try_resolve(path, base_dir)
            .unwrap_or_else(|| path.to_owned())
    }

    fn try_resolve(&self, path: &str, base_dir: Option<&Utf8Path>) -> Option<String> {
        let expanded = self.expand_tilde(path)?;
        if expanded.is_absolute() {
            return Some(expanded.into_string());
        }

        let base = match base_dir {
            Some(dir) => absolute(dir)?,
            None => current_dir()?,
        };
        Some(normalise(&base.join(expanded)).into_string())
    }

    fn expand_tilde(&self, path: &str) -> Option<Utf8PathBuf> {
        if path == "~" {
            return self.home_dir();
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return self.home_dir().map(|home| home.join(rest));
        }
        Some(Utf8PathBuf::from(path))
    }
}

/// Returns the current working directory as a UTF-8 path.
pub(crate) fn current_dir() -> Option<Utf8PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    Utf8PathBuf::try_from(cwd).ok()
}

/// Anchors `dir` to the current working directory when it is relative.
pub(crate) fn absolute(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    if dir.is_absolute() {
        return Some(dir.to_owned());
    }
    current_dir().map(|cwd| normalise(&cwd.join(dir)))
}

/// Folds `.` and `..` segments without touching the filesystem.
fn normalise(path: &Utf8Path) -> Utf8PathBuf {
    let mut normalised = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                normalised.pop();
            }
            Utf8Component::Prefix(_) | Utf8Component::RootDir | Utf8Component::Normal(_) => {
                normalised.push(component.as_str());
            }
        }
    }
    normalised
}
