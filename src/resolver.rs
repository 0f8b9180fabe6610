//! Ordered resolution of the Maven home directory.
//!
//! The resolver considers candidates in the following order and stops at the
//! first one that is a valid Maven home:
//!
//! 1. An explicit override supplied by the caller, if any.
//! 2. The `M2_HOME` environment variable.
//! 3. The `MAVEN_HOME` environment variable.
//! 4. The `m2` directory under the user's home directory.
//! 5. On macOS, the Homebrew cellar and then the system java tools.
//! 6. On Linux, `/usr/share/maven` and then `/usr/share/maven2`.
//!
//! Blank values are skipped. Nothing is cached: each call re-reads the
//! environment and filesystem.

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, trace};
use serde::Serialize;
use std::fmt;

use crate::environment::{ENV_M2_HOME, ENV_MAVEN_HOME, Environment, SystemEnvironment, non_blank};
use crate::home::{MavenHome, is_valid_maven_home};
use crate::platform::PlatformFamily;
use crate::search::{SearchRoots, from_brew, from_linux_share, from_mac_system_java_tools};

/// Directory under the user's home checked for a Maven installation.
pub const USER_HOME_M2_DIR: &str = "m2";

const LOG_TARGET: &str = "maven_home::resolver";

/// Strategy that produced a resolved Maven home.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HomeSource {
    /// Path supplied explicitly by the caller.
    Override,
    /// The `M2_HOME` environment variable.
    M2HomeVariable,
    /// The `MAVEN_HOME` environment variable.
    MavenHomeVariable,
    /// `<user home>/m2`.
    UserHome,
    /// The Homebrew cellar on macOS.
    Homebrew,
    /// The system java-tools tree on macOS.
    MacSystemJavaTools,
    /// A distribution package under `/usr/share` on Linux.
    LinuxPackage,
}

impl fmt::Display for HomeSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => formatter.write_str("explicit override"),
            Self::M2HomeVariable => formatter.write_str(ENV_M2_HOME),
            Self::MavenHomeVariable => formatter.write_str(ENV_MAVEN_HOME),
            Self::UserHome => formatter.write_str("user home directory"),
            Self::Homebrew => formatter.write_str("Homebrew cellar"),
            Self::MacSystemJavaTools => formatter.write_str("system java tools"),
            Self::LinuxPackage => formatter.write_str("Linux package directory"),
        }
    }
}

/// Outcome of a successful resolution including provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedHome {
    path: Utf8PathBuf,
    source: HomeSource,
}

impl ResolvedHome {
    const fn new(path: Utf8PathBuf, source: HomeSource) -> Self {
        Self { path, source }
    }

    /// Returns the Maven home directory.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns the strategy that found the home.
    #[must_use]
    pub const fn source(&self) -> HomeSource {
        self.source
    }

    /// Consumes the result, yielding the path.
    #[must_use]
    pub fn into_path(self) -> Utf8PathBuf {
        self.path
    }

    /// Returns the home as a [`MavenHome`], re-checking that it is still valid.
    #[must_use]
    pub fn maven_home(&self) -> Option<MavenHome> {
        MavenHome::new(self.path.clone())
    }
}

/// Locates a Maven installation.
///
/// # Examples
///
/// ```no_run
/// use maven_home::environment::SystemEnvironment;
/// use maven_home::platform::PlatformFamily;
/// use maven_home::resolver::HomeResolver;
///
/// let env = SystemEnvironment;
/// let resolver = HomeResolver::new(&env, PlatformFamily::current());
/// match resolver.resolve() {
///     Some(home) => println!("{} (from {})", home.path(), home.source()),
///     None => eprintln!("Maven not found"),
/// }
/// ```
pub struct HomeResolver<'a> {
    env: &'a dyn Environment,
    platform: PlatformFamily,
    roots: SearchRoots,
    explicit: Option<String>,
}

impl<'a> HomeResolver<'a> {
    /// Creates a resolver reading from `env` and searching as `platform`.
    #[must_use]
    pub fn new(env: &'a dyn Environment, platform: PlatformFamily) -> Self {
        Self {
            env,
            platform,
            roots: SearchRoots::default(),
            explicit: None,
        }
    }

    /// Replaces the fixed search locations.
    #[must_use]
    pub fn with_roots(mut self, roots: SearchRoots) -> Self {
        self.roots = roots;
        self
    }

    /// Sets a path to try before any other strategy.
    ///
    /// Blank or invalid overrides are skipped like any other candidate.
    #[must_use]
    pub fn with_override(mut self, path: impl Into<String>) -> Self {
        self.explicit = Some(path.into());
        self
    }

    /// Returns the platform family this resolver searches as.
    #[must_use]
    pub const fn platform(&self) -> PlatformFamily {
        self.platform
    }

    /// Runs every strategy in priority order and returns the first valid home.
    #[must_use]
    pub fn resolve(&self) -> Option<ResolvedHome> {
        let resolved = self
            .from_configured_paths()
            .or_else(|| self.from_user_home())
            .or_else(|| self.from_platform());

        match &resolved {
            Some(home) => debug!(
                target: LOG_TARGET,
                "resolved Maven home `{}` from {}",
                home.path(),
                home.source(),
            ),
            None => debug!(
                target: LOG_TARGET,
                "no Maven home found on {} platform",
                self.platform,
            ),
        }

        resolved
    }

    fn from_configured_paths(&self) -> Option<ResolvedHome> {
        let variables = [
            (HomeSource::M2HomeVariable, ENV_M2_HOME),
            (HomeSource::MavenHomeVariable, ENV_MAVEN_HOME),
        ];

        // Each variable is read only once the previous candidate has been rejected.
        self.explicit
            .as_deref()
            .and_then(|raw| try_candidate(HomeSource::Override, non_blank(Some(raw))?))
            .or_else(|| {
                variables.into_iter().find_map(|(source, key)| {
                    let raw = self.env.var(key);
                    try_candidate(source, non_blank(raw.as_deref())?)
                })
            })
    }

    fn from_user_home(&self) -> Option<ResolvedHome> {
        let user_home = self.env.home_dir()?;
        if non_blank(Some(user_home.as_str())).is_none() {
            return None;
        }

        try_candidate(HomeSource::UserHome, user_home.join(USER_HOME_M2_DIR))
    }

    fn from_platform(&self) -> Option<ResolvedHome> {
        match self.platform {
            PlatformFamily::Mac => from_brew(&self.roots)
                .map(|path| ResolvedHome::new(path, HomeSource::Homebrew))
                .or_else(|| {
                    from_mac_system_java_tools(&self.roots)
                        .map(|path| ResolvedHome::new(path, HomeSource::MacSystemJavaTools))
                }),
            PlatformFamily::Linux => from_linux_share(&self.roots)
                .map(|path| ResolvedHome::new(path, HomeSource::LinuxPackage)),
            PlatformFamily::Other => None,
        }
    }
}

/// Validates a single candidate, attributing it to `source` on success.
fn try_candidate(source: HomeSource, path: impl Into<Utf8PathBuf>) -> Option<ResolvedHome> {
    let candidate = path.into();
    if is_valid_maven_home(&candidate) {
        return Some(ResolvedHome::new(candidate, source));
    }

    trace!(target: LOG_TARGET, "skipping {source} `{candidate}`: no bin/m2.conf");
    None
}

/// Resolves the Maven home from the real environment on the host platform.
///
/// # Examples
///
/// ```no_run
/// if let Some(home) = maven_home::resolve_maven_home() {
///     println!("Maven lives at {home}");
/// }
/// ```
#[must_use]
pub fn resolve_maven_home() -> Option<Utf8PathBuf> {
    let env = SystemEnvironment;
    HomeResolver::new(&env, PlatformFamily::current())
        .resolve()
        .map(ResolvedHome::into_path)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
