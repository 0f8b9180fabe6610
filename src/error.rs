//! Error types for the `maven-home` command-line surface.
//!
//! Resolution itself never fails: a missing installation is `None`. These
//! variants cover the edges around it, such as bad flags and failed writes.

use thiserror::Error;

/// Errors reported by the command-line layer.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// No strategy produced a valid Maven home.
    #[error("Maven home directory not found; set M2_HOME or MAVEN_HOME to a Maven installation")]
    HomeNotFound,

    /// A platform name could not be parsed.
    #[error("unknown platform '{value}'; expected one of: mac, linux, other")]
    UnknownPlatform {
        /// The rejected input.
        value: String,
    },

    /// Writing output failed.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

impl LocatorError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::HomeNotFound => 1,
            Self::UnknownPlatform { .. } => 2,
            Self::WriteFailed { .. } => 3,
        }
    }
}

/// Result type for the command-line layer.
pub type Result<T> = std::result::Result<T, LocatorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LocatorError::HomeNotFound, 1)]
    #[case(LocatorError::UnknownPlatform { value: "beos".to_owned() }, 2)]
    #[case(
        LocatorError::WriteFailed { source: std::io::Error::other("closed") },
        3
    )]
    fn maps_exit_codes(#[case] error: LocatorError, #[case] expected: i32) {
        assert_eq!(error.exit_code(), expected);
    }

    #[test]
    fn not_found_message_names_the_variables() {
        let message = LocatorError::HomeNotFound.to_string();
        assert!(message.contains("M2_HOME"));
        assert!(message.contains("MAVEN_HOME"));
    }
}
