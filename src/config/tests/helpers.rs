//! Shared fixtures and helper functions for config tests.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use mockable::MockEnv;
use rstest::fixture;
use tempfile::TempDir;

use crate::config::{ConfigLoader, Options};

/// Home directory reported by [`env`].
pub const HOME: &str = "/home/tester";

/// Fixture providing a `MockEnv` whose `HOME` is [`HOME`].
#[fixture]
pub fn env() -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string().returning(|key| {
        if key == "HOME" {
            Some(String::from(HOME))
        } else {
            None
        }
    });
    env
}

/// Fixture providing defaults that do not depend on the host's sound files.
#[fixture]
pub fn defaults() -> Options {
    Options {
        sound_file: String::from("/system/sounds/default.aiff"),
        ..Options::default()
    }
}

/// Fixture providing an empty temporary workspace.
#[fixture]
pub fn workspace() -> Workspace {
    Workspace::new().expect("temporary directory should be created")
}

/// A temporary directory tree for configuration files.
pub struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    /// Creates a fresh temporary workspace.
    pub fn new() -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf())
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        Ok(Self { _dir: dir, root })
    }

    /// Returns the workspace root.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Writes `content` to `relative` below the root, creating parent
    /// directories, and returns the absolute path.
    pub fn write(&self, relative: &str, content: &str) -> Utf8PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("parent directories should be created");
        }
        fs::write(&path, content).expect("file should be written");
        path
    }

    /// Creates the directory `relative` below the root and returns it.
    pub fn mkdir(&self, relative: &str) -> Utf8PathBuf {
        let path = self.root.join(relative);
        fs::create_dir_all(&path).expect("directory should be created");
        path
    }
}

/// Helper: Creates a loader with test defaults that discovers from `start`.
pub fn loader_at<'a>(
    env: &'a MockEnv,
    defaults: Options,
    start: &Utf8Path,
) -> ConfigLoader<'a, MockEnv> {
    ConfigLoader::new(env)
        .with_defaults(defaults)
        .with_start_dir(start.to_owned())
}
