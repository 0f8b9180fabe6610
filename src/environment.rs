//! Access to ambient process state.
//!
//! The resolver reads environment variables and the user's home directory
//! through [`Environment`] so tests can describe a machine without touching
//! the real process environment.

use camino::Utf8PathBuf;
use directories_next::BaseDirs;

/// Environment variable checked first for a Maven home.
pub const ENV_M2_HOME: &str = "M2_HOME";

/// Environment variable checked second for a Maven home.
pub const ENV_MAVEN_HOME: &str = "MAVEN_HOME";

/// Read-only view of the process environment.
pub trait Environment {
    /// Returns the value of an environment variable.
    ///
    /// Unset variables and values that are not valid Unicode are `None`.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns the current user's home directory, if it can be determined
    /// and is valid UTF-8.
    fn home_dir(&self) -> Option<Utf8PathBuf>;
}

/// Reads the real process environment.
///
/// # Examples
///
/// ```no_run
/// use maven_home::environment::{Environment, SystemEnvironment};
///
/// let env = SystemEnvironment;
/// if let Some(home) = env.home_dir() {
///     println!("user home: {home}");
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn home_dir(&self) -> Option<Utf8PathBuf> {
        BaseDirs::new().and_then(|dirs| Utf8PathBuf::try_from(dirs.home_dir().to_path_buf()).ok())
    }
}

/// Returns `value` unless it is empty or consists only of control characters
/// and spaces (every char up to and including U+0020).
///
/// Other Unicode whitespace, such as U+3000, counts as content. The value
/// itself is returned untrimmed.
///
/// # Examples
///
/// ```
/// use maven_home::environment::non_blank;
///
/// assert_eq!(non_blank(Some("/opt/maven")), Some("/opt/maven"));
/// assert_eq!(non_blank(Some("  ")), None);
/// assert_eq!(non_blank(None), None);
/// ```
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim_matches(|c: char| c <= ' ').is_empty())
}
