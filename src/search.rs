//! Platform-specific discovery of Maven installations.
//!
//! When neither the environment nor the user's home directory points at a
//! Maven home, the resolver falls back to the places package managers put
//! Maven:
//!
//! - Homebrew on macOS installs each version under
//!   `/usr/local/Cellar/maven/<version>/libexec`.
//! - Older macOS releases ship Maven under `/usr/share/java/maven-<version>`,
//!   usually with a `/usr/share/maven` symlink to the active one.
//! - Debian-style Linux packages install to `/usr/share/maven` or
//!   `/usr/share/maven2`.
//!
//! Unreadable or empty directories are simply "nothing found".

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, trace};
use std::cmp::Ordering;

use crate::home::is_valid_maven_home;
use crate::version::compare_versions;

/// Homebrew cellar holding one directory per installed Maven version.
pub const BREW_CELLAR_DIR: &str = "/usr/local/Cellar/maven";

/// Directory under a Homebrew keg that holds the actual distribution.
pub const BREW_LIBEXEC_DIR: &str = "libexec";

/// Symlink to the active system Maven on macOS.
pub const MAC_SYMLINK_DIR: &str = "/usr/share/maven";

/// System java-tools directory scanned on macOS.
pub const MAC_JAVA_TOOLS_DIR: &str = "/usr/share/java";

/// Prefix of Maven entries inside the java-tools directory.
pub const JAVA_TOOLS_PREFIX: &str = "maven-";

/// Linux package locations, in probing order.
pub const LINUX_SHARE_DIRS: [&str; 2] = ["/usr/share/maven", "/usr/share/maven2"];

const LOG_TARGET: &str = "maven_home::search";

/// Fixed locations probed by the platform searches.
///
/// [`SearchRoots::default`] holds the real system paths; tests point the
/// fields at temporary trees instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoots {
    /// Homebrew cellar for Maven.
    pub brew_cellar: Utf8PathBuf,
    /// macOS symlink checked before scanning java tools.
    pub mac_symlink: Utf8PathBuf,
    /// macOS java-tools directory.
    pub mac_java_tools: Utf8PathBuf,
    /// Linux candidates, checked in order.
    pub linux_dirs: Vec<Utf8PathBuf>,
}

impl Default for SearchRoots {
    fn default() -> Self {
        Self {
            brew_cellar: Utf8PathBuf::from(BREW_CELLAR_DIR),
            mac_symlink: Utf8PathBuf::from(MAC_SYMLINK_DIR),
            mac_java_tools: Utf8PathBuf::from(MAC_JAVA_TOOLS_DIR),
            linux_dirs: LINUX_SHARE_DIRS.into_iter().map(Utf8PathBuf::from).collect(),
        }
    }
}

/// Finds the newest Homebrew-installed Maven.
///
/// The cellar's subdirectories are ranked by name with
/// [`compare_versions`]; the winner's `libexec` directory is returned if it
/// is a valid Maven home. Older kegs are never considered, even when the
/// newest one is broken.
#[must_use]
pub fn from_brew(roots: &SearchRoots) -> Option<Utf8PathBuf> {
    let versions = list_entries(&roots.brew_cellar, EntryKind::Directories);
    let latest = select_latest(versions)?;
    let home = roots.brew_cellar.join(latest).join(BREW_LIBEXEC_DIR);

    validated(home)
}

/// Finds the system Maven shipped with macOS java tools.
///
/// The symlink directory wins outright when valid. Otherwise the java-tools
/// directory is scanned for `maven-<version>` entries and the newest one is
/// returned if valid.
#[must_use]
pub fn from_mac_system_java_tools(roots: &SearchRoots) -> Option<Utf8PathBuf> {
    if is_valid_maven_home(&roots.mac_symlink) {
        debug!(target: LOG_TARGET, "using system symlink `{}`", roots.mac_symlink);
        return Some(roots.mac_symlink.clone());
    }

    let entries = list_entries(&roots.mac_java_tools, EntryKind::Any);
    let latest = select_latest_with_prefix(entries, JAVA_TOOLS_PREFIX)?;

    validated(roots.mac_java_tools.join(latest))
}

/// Finds a distribution-packaged Maven on Linux.
#[must_use]
pub fn from_linux_share(roots: &SearchRoots) -> Option<Utf8PathBuf> {
    roots
        .linux_dirs
        .iter()
        .find(|dir| {
            trace!(target: LOG_TARGET, "probing `{dir}`");
            is_valid_maven_home(dir)
        })
        .cloned()
}

/// Picks the greatest version name.
///
/// Ties keep the entry seen first. Returns `None` for an empty input.
///
/// # Examples
///
/// ```
/// use maven_home::search::select_latest;
///
/// let latest = select_latest(["3.3.9", "3.5.0", "3.2.1"]);
/// assert_eq!(latest, Some("3.5.0"));
/// ```
#[must_use]
pub fn select_latest<I, S>(names: I) -> Option<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keep_greatest(names, |candidate, best| {
        compare_versions(candidate.as_ref(), best.as_ref())
    })
}

/// Picks the entry with the greatest version after `prefix`.
///
/// Entries not starting with `prefix` are ignored and only the remainder is
/// compared. Ties keep the entry seen first.
///
/// # Examples
///
/// ```
/// use maven_home::search::select_latest_with_prefix;
///
/// let latest = select_latest_with_prefix(["ant-1.10", "maven-3.1", "maven-3.9"], "maven-");
/// assert_eq!(latest, Some("maven-3.9"));
/// ```
#[must_use]
pub fn select_latest_with_prefix<I, S>(names: I, prefix: &str) -> Option<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let matching = names
        .into_iter()
        .filter(|name| name.as_ref().starts_with(prefix));

    keep_greatest(matching, |candidate, best| {
        compare_versions(
            strip(candidate.as_ref(), prefix),
            strip(best.as_ref(), prefix),
        )
    })
}

fn strip<'a>(name: &'a str, prefix: &str) -> &'a str {
    name.strip_prefix(prefix).unwrap_or(name)
}

/// Replaces the running best only on a strictly greater candidate.
fn keep_greatest<I, S, F>(items: I, mut compare: F) -> Option<S>
where
    I: IntoIterator<Item = S>,
    F: FnMut(&S, &S) -> Ordering,
{
    items.into_iter().fold(None, |best, candidate| match best {
        Some(current) if compare(&candidate, &current) != Ordering::Greater => Some(current),
        _ => Some(candidate),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntryKind {
    Directories,
    Any,
}

/// Lists entry names in `dir`, in the order the filesystem yields them.
///
/// Listing errors and entries with non-UTF-8 names are skipped.
fn list_entries(dir: &Utf8Path, kind: EntryKind) -> Vec<String> {
    let entries = match dir.read_dir_utf8() {
        Ok(entries) => entries,
        Err(e) => {
            trace!(target: LOG_TARGET, "cannot list `{dir}`: {e}");
            return Vec::new();
        }
    };

    entries
        .filter_map(|listed| match listed {
            Ok(entry) => Some(entry),
            Err(e) => {
                trace!(target: LOG_TARGET, "skipping unreadable entry in `{dir}`: {e}");
                None
            }
        })
        .filter(|entry| kind == EntryKind::Any || entry.path().is_dir())
        .map(|entry| entry.file_name().to_owned())
        .collect()
}

fn validated(home: Utf8PathBuf) -> Option<Utf8PathBuf> {
    if is_valid_maven_home(&home) {
        Some(home)
    } else {
        debug!(target: LOG_TARGET, "newest candidate `{home}` is not a Maven home");
        None
    }
}
