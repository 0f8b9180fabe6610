//! CLI argument definitions for the `maven-home` binary.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the entrypoint so the arguments can be constructed directly in tests.

use clap::Parser;

use crate::platform::PlatformFamily;

/// Locate the Maven installation on this machine.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "maven-home")]
#[command(version, about)]
#[command(long_about = concat!(
    "Locate the Maven installation on this machine.\n\n",
    "The home directory is taken from the first of these that contains ",
    "bin/m2.conf: --maven-home, $M2_HOME, $MAVEN_HOME, ~/m2, and then the ",
    "platform's package locations (Homebrew and /usr/share/java on macOS, ",
    "/usr/share/maven and /usr/share/maven2 on Linux).",
))]
#[command(after_help = concat!(
    "EXIT STATUS:\n",
    "  0  a Maven home was found\n",
    "  1  no Maven home was found\n",
    "  2  invalid arguments\n",
    "  3  output could not be written\n\n",
    "EXAMPLES:\n",
    "  Print the Maven home:\n",
    "    $ maven-home\n\n",
    "  Show where it came from, as JSON:\n",
    "    $ maven-home --json\n\n",
    "  Try a specific directory first:\n",
    "    $ maven-home --maven-home /opt/apache-maven-3.9.6\n\n",
    "  Search as if running on macOS:\n",
    "    $ maven-home --platform mac",
))]
pub struct Cli {
    /// Directory to try before the environment variables.
    #[arg(long, value_name = "DIR")]
    pub maven_home: Option<String>,

    /// Search as this platform family instead of the host's (mac, linux, other).
    #[arg(long, value_name = "PLATFORM")]
    pub platform: Option<PlatformFamily>,

    /// Output in JSON format for scripting.
    #[arg(long)]
    pub json: bool,

    /// Also print the per-user .m2 directory, settings file and repository.
    #[arg(long)]
    pub m2_dir: bool,

    /// Report which strategy found the home on stderr (repeatable: -v, -vv).
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Returns the requested platform, or the host's when none was given.
    ///
    /// # Examples
    ///
    /// ```
    /// use maven_home::cli::Cli;
    /// use maven_home::platform::PlatformFamily;
    ///
    /// let cli = Cli {
    ///     platform: Some(PlatformFamily::Linux),
    ///     ..Cli::default()
    /// };
    /// assert_eq!(cli.effective_platform(), PlatformFamily::Linux);
    /// ```
    #[must_use]
    pub fn effective_platform(&self) -> PlatformFamily {
        self.platform.unwrap_or_else(PlatformFamily::current)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
