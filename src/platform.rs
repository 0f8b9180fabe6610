//! Coarse operating-system classification.
//!
//! Discovery heuristics differ between macOS (Homebrew and the system
//! java-tools tree) and Linux (distribution packages under `/usr/share`).
//! Everything else only gets the environment and user-home probes.

use std::fmt;
use std::str::FromStr;

use crate::error::LocatorError;

/// Platform family used to pick discovery heuristics.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PlatformFamily {
    /// macOS.
    Mac,
    /// Any Linux distribution.
    Linux,
    /// Windows, the BSDs and everything else.
    Other,
}

impl PlatformFamily {
    /// Returns the family of the host this binary was built for.
    #[must_use]
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Classifies a free-form operating-system name.
    ///
    /// Names starting with `mac` or `linux` (in any case) map to the
    /// corresponding family.
    ///
    /// # Examples
    ///
    /// ```
    /// use maven_home::platform::PlatformFamily;
    ///
    /// assert_eq!(PlatformFamily::from_os_name("Mac OS X"), PlatformFamily::Mac);
    /// assert_eq!(PlatformFamily::from_os_name("macos"), PlatformFamily::Mac);
    /// assert_eq!(PlatformFamily::from_os_name("Linux"), PlatformFamily::Linux);
    /// assert_eq!(PlatformFamily::from_os_name("Windows 11"), PlatformFamily::Other);
    /// ```
    #[must_use]
    pub fn from_os_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.starts_with("mac") {
            Self::Mac
        } else if lower.starts_with("linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Short lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mac => "mac",
            Self::Linux => "linux",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for PlatformFamily {
    type Err = LocatorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "mac" | "macos" => Ok(Self::Mac),
            "linux" => Ok(Self::Linux),
            "other" => Ok(Self::Other),
            _ => Err(LocatorError::UnknownPlatform {
                value: input.to_owned(),
            }),
        }
    }
}
