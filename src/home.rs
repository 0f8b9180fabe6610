//! Maven installation layout and validation.
//!
//! A directory is a usable Maven home when it contains `bin/m2.conf`, the
//! classworlds launcher configuration shipped with every Maven 2 and 3
//! distribution. Every discovery strategy funnels its candidates through
//! [`is_valid_maven_home`].

use camino::{Utf8Path, Utf8PathBuf};

/// Directory holding launcher scripts inside a Maven home.
pub const BIN_DIR: &str = "bin";

/// Launcher configuration file that marks a Maven home.
pub const M2_CONF_FILE: &str = "m2.conf";

/// Directory holding global configuration inside a Maven home.
pub const CONF_DIR: &str = "conf";

/// Directory holding the distribution's jars inside a Maven home.
pub const LIB_DIR: &str = "lib";

/// Name of the Maven settings file, both global and per-user.
pub const SETTINGS_XML: &str = "settings.xml";

/// Per-user Maven directory under the home directory.
pub const DOT_M2_DIR: &str = ".m2";

/// Local artifact repository inside the per-user Maven directory.
pub const REPOSITORY_DIR: &str = "repository";

/// Returns the marker file path for a candidate Maven home.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use maven_home::home::maven_conf_file;
///
/// let conf = maven_conf_file(Utf8Path::new("/opt/maven"));
/// assert_eq!(conf.as_str(), "/opt/maven/bin/m2.conf");
/// ```
#[must_use]
pub fn maven_conf_file(home: &Utf8Path) -> Utf8PathBuf {
    home.join(BIN_DIR).join(M2_CONF_FILE)
}

/// Checks whether the given directory is a Maven installation.
///
/// Only the existence of `bin/m2.conf` is checked; its contents and
/// permissions are not inspected. Any I/O failure counts as absence.
#[must_use]
pub fn is_valid_maven_home(home: &Utf8Path) -> bool {
    maven_conf_file(home).exists()
}

/// A directory known to contain a Maven installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenHome {
    root: Utf8PathBuf,
}

impl MavenHome {
    /// Wraps `root` if it is a valid Maven home.
    ///
    /// # Examples
    ///
    /// ```
    /// use maven_home::home::MavenHome;
    ///
    /// assert!(MavenHome::new("/definitely/not/maven").is_none());
    /// ```
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Option<Self> {
        let candidate = root.into();
        is_valid_maven_home(&candidate).then_some(Self { root: candidate })
    }

    /// Returns the installation root.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the `bin` directory.
    #[must_use]
    pub fn bin_dir(&self) -> Utf8PathBuf {
        self.root.join(BIN_DIR)
    }

    /// Returns the `bin/m2.conf` marker file.
    #[must_use]
    pub fn conf_file(&self) -> Utf8PathBuf {
        maven_conf_file(&self.root)
    }

    /// Returns the `conf` directory.
    #[must_use]
    pub fn conf_dir(&self) -> Utf8PathBuf {
        self.root.join(CONF_DIR)
    }

    /// Returns the global `conf/settings.xml` path.
    #[must_use]
    pub fn global_settings_file(&self) -> Utf8PathBuf {
        self.conf_dir().join(SETTINGS_XML)
    }

    /// Returns the `lib` directory.
    #[must_use]
    pub fn lib_dir(&self) -> Utf8PathBuf {
        self.root.join(LIB_DIR)
    }

    /// Consumes the home, yielding its root path.
    #[must_use]
    pub fn into_root(self) -> Utf8PathBuf {
        self.root
    }
}

/// The per-user `~/.m2` directory.
///
/// Nothing here touches the filesystem; the paths may not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMavenDir {
    root: Utf8PathBuf,
}

impl UserMavenDir {
    /// Builds the `.m2` directory for the given user home.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use maven_home::home::UserMavenDir;
    ///
    /// let m2 = UserMavenDir::under(Utf8Path::new("/home/dev"));
    /// assert_eq!(m2.root().as_str(), "/home/dev/.m2");
    /// assert_eq!(m2.repository_dir().as_str(), "/home/dev/.m2/repository");
    /// ```
    #[must_use]
    pub fn under(user_home: &Utf8Path) -> Self {
        Self {
            root: user_home.join(DOT_M2_DIR),
        }
    }

    /// Returns the `.m2` directory itself.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the per-user `settings.xml` path.
    #[must_use]
    pub fn settings_file(&self) -> Utf8PathBuf {
        self.root.join(SETTINGS_XML)
    }

    /// Returns the local artifact repository directory.
    #[must_use]
    pub fn repository_dir(&self) -> Utf8PathBuf {
        self.root.join(REPOSITORY_DIR)
    }
}
