//! Locate command implementation.
//!
//! Builds a [`HomeResolver`] from the parsed command line, runs it, and writes
//! the result to stdout.

use std::io::Write;

use log::debug;

use crate::cli::Cli;
use crate::environment::Environment;
use crate::error::{LocatorError, Result};
use crate::home::UserMavenDir;
use crate::output::{format_human, format_json};
use crate::resolver::HomeResolver;

/// Resolves the Maven home and writes it to `stdout`.
///
/// With `-v` the strategy that found the home is reported on `stderr`.
///
/// # Errors
///
/// Returns [`LocatorError::HomeNotFound`] when no strategy yields a valid
/// home, and [`LocatorError::WriteFailed`] when stdout cannot be written.
pub fn run_locate(
    cli: &Cli,
    env: &dyn Environment,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<()> {
    let mut resolver = HomeResolver::new(env, cli.effective_platform());
    if let Some(explicit) = &cli.maven_home {
        resolver = resolver.with_override(explicit.as_str());
    }

    let resolved = resolver.resolve().ok_or(LocatorError::HomeNotFound)?;

    if cli.verbosity > 0 {
        write_stderr_line(
            stderr,
            format_args!("Found Maven home via {}", resolved.source()),
        );
    }

    let user_dir = if cli.m2_dir {
        user_maven_dir(env)
    } else {
        None
    };

    let output = if cli.json {
        format_json(&resolved, user_dir.as_ref())
    } else {
        format_human(&resolved, user_dir.as_ref())
    };

    writeln!(stdout, "{output}").map_err(|e| LocatorError::WriteFailed { source: e })?;

    Ok(())
}

fn user_maven_dir(env: &dyn Environment) -> Option<UserMavenDir> {
    let user_home = env.home_dir();
    if user_home.is_none() {
        debug!(target: "maven_home::locate", "user home unknown; omitting .m2 directory");
    }
    user_home.map(|home| UserMavenDir::under(&home))
}

/// Writes a line to stderr, ignoring failures.
pub fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformFamily;
    use crate::test_support::{FakeEnvironment, TempTree};

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn other_platform_cli() -> Cli {
        Cli {
            platform: Some(PlatformFamily::Other),
            ..Cli::default()
        }
    }

    #[test]
    fn prints_resolved_home() {
        let tree = TempTree::new();
        let root = tree.maven_home("maven");
        let env = FakeEnvironment::default().with_var("M2_HOME", root.as_str());
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        run_locate(&other_platform_cli(), &env, &mut stdout, &mut stderr).expect("home found");

        assert_eq!(String::from_utf8_lossy(&stdout), format!("{root}\n"));
        assert!(stderr.is_empty());
    }

    #[test]
    fn verbose_reports_source_on_stderr() {
        let tree = TempTree::new();
        let root = tree.maven_home("maven");
        let env = FakeEnvironment::default().with_var("MAVEN_HOME", root.as_str());
        let cli = Cli {
            verbosity: 1,
            ..other_platform_cli()
        };
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        run_locate(&cli, &env, &mut stdout, &mut stderr).expect("home found");

        assert_eq!(
            String::from_utf8_lossy(&stderr),
            "Found Maven home via MAVEN_HOME\n"
        );
    }

    #[test]
    fn override_flag_is_tried_first() {
        let tree = TempTree::new();
        let explicit = tree.maven_home("explicit");
        let m2 = tree.maven_home("m2");
        let env = FakeEnvironment::default().with_var("M2_HOME", m2.as_str());
        let cli = Cli {
            maven_home: Some(explicit.to_string()),
            ..other_platform_cli()
        };
        let mut stdout = Vec::new();

        run_locate(&cli, &env, &mut stdout, &mut Vec::new()).expect("home found");

        assert_eq!(String::from_utf8_lossy(&stdout).trim_end(), explicit.as_str());
    }

    #[test]
    fn missing_home_is_an_error() {
        let env = FakeEnvironment::default();
        let mut stdout = Vec::new();

        let result = run_locate(&other_platform_cli(), &env, &mut stdout, &mut Vec::new());

        assert!(matches!(result, Err(LocatorError::HomeNotFound)));
        assert!(stdout.is_empty());
    }

    #[test]
    fn m2_dir_flag_adds_user_directory() {
        let tree = TempTree::new();
        let root = tree.maven_home("maven");
        let env = FakeEnvironment::default()
            .with_var("M2_HOME", root.as_str())
            .with_home("/home/dev");
        let cli = Cli {
            m2_dir: true,
            json: true,
            ..other_platform_cli()
        };
        let mut stdout = Vec::new();

        run_locate(&cli, &env, &mut stdout, &mut Vec::new()).expect("home found");

        let value: serde_json::Value = serde_json::from_slice(&stdout).expect("valid JSON");
        assert_eq!(value["source"], "m2-home-variable");
        assert_eq!(value["user_dir"]["root"], "/home/dev/.m2");
    }

    #[test]
    fn m2_dir_without_user_home_is_omitted() {
        let tree = TempTree::new();
        let root = tree.maven_home("maven");
        let env = FakeEnvironment::default().with_var("M2_HOME", root.as_str());
        let cli = Cli {
            m2_dir: true,
            ..other_platform_cli()
        };
        let mut stdout = Vec::new();

        run_locate(&cli, &env, &mut stdout, &mut Vec::new()).expect("home found");

        assert!(!String::from_utf8_lossy(&stdout).contains("User directory"));
    }

    #[test]
    fn failed_write_is_reported() {
        let tree = TempTree::new();
        let root = tree.maven_home("maven");
        let env = FakeEnvironment::default().with_var("M2_HOME", root.as_str());

        let result = run_locate(&other_platform_cli(), &env, &mut FailingWriter, &mut Vec::new());

        assert!(matches!(result, Err(LocatorError::WriteFailed { .. })));
    }

    #[test]
    fn stderr_failures_are_ignored() {
        write_stderr_line(&mut FailingWriter, "ignored");
    }
}
