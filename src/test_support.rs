//! Shared test helpers for building fake Maven installations on disk.
//!
//! Available to unit tests and, through the `test-support` feature, to the
//! integration and behaviour suites.

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

use crate::environment::Environment;
use crate::home::{BIN_DIR, M2_CONF_FILE};

/// A temporary directory tree addressed with UTF-8 paths.
///
/// The tree is removed when the value is dropped.
pub struct TempTree {
    _temp: TempDir,
    path: Utf8PathBuf,
}

impl TempTree {
    /// Creates an empty temporary tree.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created or its path is not UTF-8.
    #[must_use]
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap_or_else(|e| panic!("failed to create temp dir: {e}"));
        let path = Utf8PathBuf::try_from(temp.path().to_owned())
            .unwrap_or_else(|e| panic!("non-UTF-8 temp path: {e}"));
        Self { _temp: temp, path }
    }

    /// Returns the root of the tree.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Creates `relative` (and its parents) as a directory.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    pub fn dir(&self, relative: &str) -> Utf8PathBuf {
        let dir = self.path.join(relative);
        fs::create_dir_all(&dir).unwrap_or_else(|e| panic!("failed to create {dir}: {e}"));
        dir
    }

    /// Creates an empty file at `relative`, creating parent directories.
    ///
    /// # Panics
    ///
    /// Panics if the file or its parents cannot be created.
    pub fn file(&self, relative: &str) -> Utf8PathBuf {
        let file = self.path.join(relative);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| panic!("failed to create {parent}: {e}"));
        }
        fs::write(&file, b"").unwrap_or_else(|e| panic!("failed to write {file}: {e}"));
        file
    }

    /// Creates a valid Maven home at `relative` and returns its root.
    ///
    /// # Panics
    ///
    /// Panics if the marker file cannot be written.
    pub fn maven_home(&self, relative: &str) -> Utf8PathBuf {
        self.file(&format!("{relative}/{BIN_DIR}/{M2_CONF_FILE}"));
        self.path.join(relative)
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}

/// An [`Environment`] with fixed contents.
///
/// # Examples
///
/// ```
/// use maven_home::environment::Environment;
/// use maven_home::test_support::FakeEnvironment;
///
/// let env = FakeEnvironment::default().with_var("M2_HOME", "/opt/maven");
/// assert_eq!(env.var("M2_HOME").as_deref(), Some("/opt/maven"));
/// assert!(env.home_dir().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FakeEnvironment {
    vars: HashMap<String, String>,
    home: Option<Utf8PathBuf>,
}

impl FakeEnvironment {
    /// Sets an environment variable.
    #[must_use]
    pub fn with_var(mut self, key: &str, value: impl Into<String>) -> Self {
        self.vars.insert(key.to_owned(), value.into());
        self
    }

    /// Sets the user home directory.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<Utf8PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }
}

impl Environment for FakeEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn home_dir(&self) -> Option<Utf8PathBuf> {
        self.home.clone()
    }
}
