//! Release entries and version history.

use std::fmt;
use std::fs;
use std::path::Path;
use std::slice;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FontviewError, Result};
use crate::version::is_release_version;

/// Default note recorded for a release without hand-written notes.
pub const DEFAULT_RELEASE_NOTE: &str = "Version update";

/// Kind of user-visible change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChangeType {
    Feature,
    Improvement,
    Fix,
    Other,
}

impl ChangeType {
    /// All change types in changelog bucket order.
    pub const ALL: [ChangeType; 4] = [Self::Feature, Self::Improvement, Self::Fix, Self::Other];

    /// Canonical lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Improvement => "improvement",
            Self::Fix => "fix",
            Self::Other => "other",
        }
    }

    /// Heading text used for this bucket in a rendered changelog.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Feature => "✨ New Features",
            Self::Improvement => "🚀 Improvements",
            Self::Fix => "🐛 Bug Fixes",
            Self::Other => "Other Changes",
        }
    }

    /// Map a free-form label to a change type.
    ///
    /// Matching is a case-insensitive substring test, checked in the
    /// order feature, improvement, fix. Anything else is `Other`.
    pub fn from_label(label: &str) -> Self {
        let text = label.to_lowercase();
        if text.contains("新功能") || text.contains("feature") {
            Self::Feature
        } else if text.contains("优化") || text.contains("improvement") {
            Self::Improvement
        } else if text.contains("修复") || text.contains("fix") {
            Self::Fix
        } else {
            Self::Other
        }
    }
}

impl From<String> for ChangeType {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ChangeType> for String {
    fn from(change_type: ChangeType) -> Self {
        change_type.label().to_string()
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether `date` is a `YYYY-MM-DD` calendar date.
pub fn is_iso_date(date: &str) -> bool {
    date.len() == 10 && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// One bullet-level change in a release.
///
/// The text is a single line: line breaks collapse to one space and the
/// ends are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawChangeNote")]
pub struct ChangeNote {
    #[serde(rename = "type")]
    change_type: ChangeType,
    text: String,
}

impl ChangeNote {
    pub fn new(change_type: ChangeType, text: impl Into<String>) -> Self {
        Self {
            change_type,
            text: single_line(&text.into()),
        }
    }

    pub fn change_type(&self) -> ChangeType {
        self.change_type
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Deserialize)]
struct RawChangeNote {
    #[serde(rename = "type")]
    change_type: ChangeType,
    text: String,
}

impl From<RawChangeNote> for ChangeNote {
    fn from(raw: RawChangeNote) -> Self {
        Self::new(raw.change_type, raw.text)
    }
}

#[derive(Deserialize)]
struct RawReleaseEntry {
    version: String,
    date: String,
    #[serde(default)]
    changes: Vec<ChangeNote>,
}

/// A versioned changelog record.
///
/// The version always matches `v?MAJOR.MINOR.PATCH` and the date is a
/// `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReleaseEntry")]
pub struct ReleaseEntry {
    version: String,
    date: String,
    changes: Vec<ChangeNote>,
}

impl TryFrom<RawReleaseEntry> for ReleaseEntry {
    type Error = FontviewError;

    fn try_from(raw: RawReleaseEntry) -> Result<Self> {
        Self::new(raw.version, raw.date, raw.changes)
    }
}

impl ReleaseEntry {
    /// Create an entry, validating the version and date.
    pub fn new(
        version: impl Into<String>,
        date: impl Into<String>,
        changes: Vec<ChangeNote>,
    ) -> Result<Self> {
        let version = version.into();
        if !is_release_version(&version) {
            return Err(FontviewError::InvalidVersion { version });
        }

        let date = date.into();
        if !is_iso_date(&date) {
            return Err(FontviewError::InvalidDate { date });
        }

        Ok(Self {
            version,
            date,
            changes,
        })
    }

    /// The entry recorded when a release is cut without notes.
    pub fn release(version: impl Into<String>, date: impl Into<String>) -> Result<Self> {
        Self::new(
            version,
            date,
            vec![ChangeNote::new(ChangeType::Feature, DEFAULT_RELEASE_NOTE)],
        )
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn changes(&self) -> &[ChangeNote] {
        &self.changes
    }

    /// Changes of one type, in original order.
    pub fn changes_of(&self, change_type: ChangeType) -> impl Iterator<Item = &ChangeNote> {
        self.changes
            .iter()
            .filter(move |c| c.change_type == change_type)
    }
}

/// Ordered release entries, newest first by convention.
///
/// Insertion order is authoritative; entries are never re-sorted and
/// duplicate versions are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionHistory {
    entries: Vec<ReleaseEntry>,
}

impl VersionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<ReleaseEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ReleaseEntry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, ReleaseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first (newest) entry.
    pub fn latest(&self) -> Option<&ReleaseEntry> {
        self.entries.first()
    }

    /// Changes of the newest entry, or none.
    pub fn latest_changes(&self) -> &[ChangeNote] {
        self.latest().map(|e| e.changes()).unwrap_or(&[])
    }

    /// Return a new history with `entry` in front.
    pub fn prepend(&self, entry: ReleaseEntry) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        Self { entries }
    }

    /// The first `limit` entries, or all of them when `limit` is 0.
    pub fn take(&self, limit: usize) -> &[ReleaseEntry] {
        if limit > 0 && limit < self.entries.len() {
            &self.entries[..limit]
        } else {
            &self.entries
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a history from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| FontviewError::HistoryError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| FontviewError::HistoryError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save the history as pretty JSON using atomic write.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = self.to_json()?;
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, format!("{}\n", content))?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

impl<'a> IntoIterator for &'a VersionHistory {
    type Item = &'a ReleaseEntry;
    type IntoIter = slice::Iter<'a, ReleaseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
