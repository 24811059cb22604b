//! Canonical version comparison.
//!
//! Versions are compared segment by segment after dropping a single
//! leading `v`/`V`. Missing trailing segments count as `0`, so `1.2`
//! equals `1.2.0`. A segment that is not an unsigned integer is
//! unordered: it is neither greater nor less than its counterpart and
//! the comparison moves on to the next segment.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Shape of a release version: `v?MAJOR.MINOR.PATCH`.
static RELEASE_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[vV]?\d+\.\d+\.\d+$").expect("RELEASE_VERSION_REGEX must compile")
});

/// Remove one leading `v` or `V`.
pub fn strip_prefix(version: &str) -> &str {
    let version = version.trim();
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}

/// Add a `v` prefix if the version does not already carry one.
pub fn ensure_prefix(version: &str) -> String {
    let trimmed = version.trim();
    if trimmed.starts_with('v') || trimmed.starts_with('V') {
        trimmed.to_string()
    } else {
        format!("v{}", trimmed)
    }
}

/// Format a version, optionally dropping its `v` prefix.
pub fn format_version(version: &str, remove_prefix: bool) -> String {
    if remove_prefix {
        strip_prefix(version).to_string()
    } else {
        version.to_string()
    }
}

/// Check whether a string is a well-formed release version.
pub fn is_release_version(version: &str) -> bool {
    RELEASE_VERSION_REGEX.is_match(version)
}

fn segments(version: &str) -> Vec<Option<u64>> {
    strip_prefix(version)
        .split('.')
        .map(|s| s.trim().parse::<u64>().ok())
        .collect()
}

/// Compare two version strings.
///
/// Never panics; degenerate input such as `""` or `"abc"` compares
/// equal to anything whose remaining segments are zero.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = segments(a);
    let right = segments(b);
    let len = left.len().max(right.len());

    for i in 0..len {
        let l = left.get(i).copied().unwrap_or(Some(0));
        let r = right.get(i).copied().unwrap_or(Some(0));

        if let (Some(l), Some(r)) = (l, r) {
            match l.cmp(&r) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
    }

    Ordering::Equal
}

/// Compare two version strings, returning `1`, `0` or `-1`.
pub fn compare(a: &str, b: &str) -> i32 {
    match compare_versions(a, b) {
        Ordering::Greater => 1,
        Ordering::Equal => 0,
        Ordering::Less => -1,
    }
}

/// Check if `candidate` is strictly newer than `current`.
pub fn is_newer_version(candidate: &str, current: &str) -> bool {
    compare_versions(candidate, current) == Ordering::Greater
}
