//! Free-form version string comparison.
//!
//! Maven installations are ranked by directory name, and those names are not
//! guaranteed to be semantic versions (`3.5.0`, `3.0-beta-3`, `2.2.1_1`). The
//! comparator here splits a version on `.`, `_` and `-` and compares the
//! resulting tokens pairwise: numeric tokens by magnitude, anything else by
//! ordinal string order. Leftover tokens on the longer side decide the result
//! when the shared prefix is equal, so `1.2` equals `1.2.0` while `1.2-beta`
//! sorts after `1.2`.
//!
//! The ordering is deliberately not SemVer: pre-release labels sort *after*
//! the release they qualify.

use std::cmp::Ordering;

/// Compares two optional version strings.
///
/// A missing version sorts before any present version and two missing
/// versions are equal. Present versions are compared with
/// [`compare_versions`].
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use maven_home::version::compare_version_numbers;
///
/// assert_eq!(compare_version_numbers(None, Some("1.0")), Ordering::Less);
/// assert_eq!(compare_version_numbers(None, None), Ordering::Equal);
/// assert_eq!(compare_version_numbers(Some("1.10"), Some("1.2")), Ordering::Greater);
/// ```
#[must_use]
pub fn compare_version_numbers(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(lhs), Some(rhs)) => compare_versions(lhs, rhs),
    }
}

/// Compares two version strings token by token.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use maven_home::version::compare_versions;
///
/// assert_eq!(compare_versions("1.2", "1.2.0"), Ordering::Equal);
/// assert_eq!(compare_versions("1.2.1", "1.2"), Ordering::Greater);
/// assert_eq!(compare_versions("1.2-beta", "1.2"), Ordering::Greater);
/// ```
#[must_use]
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let left_tokens = split_tokens(left);
    let right_tokens = split_tokens(right);

    let shared = left_tokens
        .iter()
        .zip(&right_tokens)
        .map(|(l, r)| compare_tokens(l, r))
        .find(|ordering| ordering.is_ne());

    if let Some(ordering) = shared {
        return ordering;
    }

    match left_tokens.len().cmp(&right_tokens.len()) {
        Ordering::Equal => Ordering::Equal,
        Ordering::Greater => {
            compare_leftovers(left_tokens.iter().skip(right_tokens.len()).copied())
        }
        Ordering::Less => {
            compare_leftovers(right_tokens.iter().skip(left_tokens.len()).copied()).reverse()
        }
    }
}

/// Splits a version string into its tokens.
///
/// A string without any delimiter is a single token, even when empty.
/// Otherwise every delimiter separates a token, and empty tokens at the end
/// are dropped while leading and inner empty tokens are kept.
///
/// # Examples
///
/// ```
/// use maven_home::version::split_tokens;
///
/// assert_eq!(split_tokens("3.0-beta_1"), vec!["3", "0", "beta", "1"]);
/// assert_eq!(split_tokens("1.2."), vec!["1", "2"]);
/// assert_eq!(split_tokens(".1"), vec!["", "1"]);
/// assert_eq!(split_tokens(""), vec![""]);
/// ```
#[must_use]
pub fn split_tokens(version: &str) -> Vec<&str> {
    if !version.contains(is_delimiter) {
        return vec![version];
    }

    let mut tokens: Vec<&str> = version.split(is_delimiter).collect();
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}

const fn is_delimiter(c: char) -> bool {
    matches!(c, '.' | '_' | '-')
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn compare_tokens(left: &str, right: &str) -> Ordering {
    if is_numeric(left) && is_numeric(right) {
        compare_numeric(left, right)
    } else {
        left.cmp(right)
    }
}

/// Compares two digit strings by value without parsing them.
fn compare_numeric(left: &str, right: &str) -> Ordering {
    let left_digits = left.trim_start_matches('0');
    let right_digits = right.trim_start_matches('0');
    left_digits
        .len()
        .cmp(&right_digits.len())
        .then_with(|| left_digits.cmp(right_digits))
}

/// Compares the tokens left over on the longer side against "nothing".
///
/// Numeric tokens compare against zero; any other token is greater.
fn compare_leftovers<'a, I>(leftovers: I) -> Ordering
where
    I: IntoIterator<Item = &'a str>,
{
    leftovers
        .into_iter()
        .map(|token| {
            if is_numeric(token) {
                compare_numeric(token, "0")
            } else {
                Ordering::Greater
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
