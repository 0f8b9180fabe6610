//! Locate the Maven installation on the current machine.
//!
//! A directory is accepted as a Maven home when it contains `bin/m2.conf`.
//! Candidates are tried in a fixed order: an explicit override, `M2_HOME`,
//! `MAVEN_HOME`, `<user home>/m2`, and then platform package locations. On
//! macOS the newest Homebrew keg wins, ordered by [`version::compare_versions`].
//!
//! ```no_run
//! match maven_home::resolve_maven_home() {
//!     Some(home) => println!("{home}"),
//!     None => eprintln!("no Maven installation found"),
//! }
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod home;
pub mod locate;
pub mod output;
pub mod platform;
pub mod resolver;
pub mod search;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod version;

pub use resolver::{HomeResolver, HomeSource, ResolvedHome, resolve_maven_home};
