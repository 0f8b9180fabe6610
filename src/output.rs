//! Output formatting for a resolved Maven home.
//!
//! Human output prints the home directory alone on the first line so the
//! command can be used in `$(...)` substitutions. JSON output carries the
//! provenance as well.

use serde::Serialize;

use crate::home::UserMavenDir;
use crate::resolver::{HomeSource, ResolvedHome};

/// Format a resolved home for human-readable output.
///
/// # Examples
///
/// ```no_run
/// use maven_home::environment::SystemEnvironment;
/// use maven_home::output::format_human;
/// use maven_home::platform::PlatformFamily;
/// use maven_home::resolver::HomeResolver;
///
/// let env = SystemEnvironment;
/// if let Some(resolved) = HomeResolver::new(&env, PlatformFamily::current()).resolve() {
///     assert_eq!(format_human(&resolved, None), resolved.path().as_str());
/// }
/// ```
#[must_use]
pub fn format_human(resolved: &ResolvedHome, user_dir: Option<&UserMavenDir>) -> String {
    let mut output = resolved.path().to_string();

    if let Some(dir) = user_dir {
        output.push_str(&format!("\nUser directory: {}", dir.root()));
        output.push_str(&format!("\n  Settings: {}", dir.settings_file()));
        output.push_str(&format!("\n  Repository: {}", dir.repository_dir()));
    }

    output
}

/// Format a resolved home as JSON.
#[must_use]
pub fn format_json(resolved: &ResolvedHome, user_dir: Option<&UserMavenDir>) -> String {
    let json_data = ResolvedHomeJson::new(resolved, user_dir);

    serde_json::to_string_pretty(&json_data).unwrap_or_else(|_| "{}".to_owned())
}

/// JSON-serializable representation of a resolved home.
#[derive(Debug, Serialize)]
pub struct ResolvedHomeJson {
    /// The Maven home directory.
    pub maven_home: String,
    /// Strategy that found it.
    pub source: HomeSource,
    /// The per-user `.m2` directory, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_dir: Option<UserDirEntry>,
}

impl ResolvedHomeJson {
    fn new(resolved: &ResolvedHome, user_dir: Option<&UserMavenDir>) -> Self {
        Self {
            maven_home: resolved.path().to_string(),
            source: resolved.source(),
            user_dir: user_dir.map(|dir| UserDirEntry {
                root: dir.root().to_string(),
                settings: dir.settings_file().to_string(),
                repository: dir.repository_dir().to_string(),
            }),
        }
    }
}

/// JSON entry for the per-user `.m2` directory.
#[derive(Debug, Serialize)]
pub struct UserDirEntry {
    /// The `.m2` directory.
    pub root: String,
    /// The user `settings.xml`.
    pub settings: String,
    /// The local artifact repository.
    pub repository: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformFamily;
    use crate::resolver::HomeResolver;
    use crate::test_support::{FakeEnvironment, TempTree};
    use camino::Utf8Path;

    fn resolved_in(tree: &TempTree) -> ResolvedHome {
        let root = tree.maven_home("apache-maven-3.9.6");
        let env = FakeEnvironment::default().with_var("MAVEN_HOME", root.as_str());
        HomeResolver::new(&env, PlatformFamily::Other)
            .resolve()
            .expect("fixture home should resolve")
    }

    #[test]
    fn format_human_prints_only_the_path() {
        let tree = TempTree::new();
        let resolved = resolved_in(&tree);

        let output = format_human(&resolved, None);

        assert_eq!(output, resolved.path().as_str());
        assert!(!output.contains('\n'));
    }

    #[test]
    fn format_human_lists_user_directory() {
        let tree = TempTree::new();
        let resolved = resolved_in(&tree);
        let user_dir = UserMavenDir::under(Utf8Path::new("/home/dev"));

        let output = format_human(&resolved, Some(&user_dir));

        assert!(output.starts_with(resolved.path().as_str()));
        assert!(output.contains("User directory: /home/dev/.m2"));
        assert!(output.contains("Settings: /home/dev/.m2/settings.xml"));
        assert!(output.contains("Repository: /home/dev/.m2/repository"));
    }

    #[test]
    fn format_json_includes_source() {
        let tree = TempTree::new();
        let resolved = resolved_in(&tree);

        let json = format_json(&resolved, None);
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

        assert_eq!(value["maven_home"], resolved.path().as_str());
        assert_eq!(value["source"], "maven-home-variable");
        assert!(value.get("user_dir").is_none());
    }

    #[test]
    fn format_json_includes_user_directory_when_given() {
        let tree = TempTree::new();
        let resolved = resolved_in(&tree);
        let user_dir = UserMavenDir::under(Utf8Path::new("/home/dev"));

        let json = format_json(&resolved, Some(&user_dir));
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

        assert_eq!(value["user_dir"]["root"], "/home/dev/.m2");
        assert_eq!(value["user_dir"]["settings"], "/home/dev/.m2/settings.xml");
        assert_eq!(value["user_dir"]["repository"], "/home/dev/.m2/repository");
    }
}
