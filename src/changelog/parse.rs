//! Markdown changelog parsing.
//!
//! The parser is line based and never fails: lines before the first
//! release heading, and lines it does not recognise, are ignored.

use regex::Regex;
use std::sync::LazyLock;

use super::entry::{is_iso_date, ChangeNote, ChangeType, ReleaseEntry, VersionHistory};

/// `## v1.0.1 (2025-04-12)`, date optional.
static RELEASE_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^##\s+([vV]?\d+\.\d+\.\d+)(?:\s+\((\d{4}-\d{2}-\d{2})\))?")
        .expect("RELEASE_HEADING_REGEX must compile")
});

/// `### ✨ New Features`
static BUCKET_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^###\s+(.+)$").expect("BUCKET_HEADING_REGEX must compile"));

/// `- [feature] text`
static LABELLED_BULLET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-\s+\[(.+?)\]\s+(.+)$").expect("LABELLED_BULLET_REGEX must compile")
});

/// `- text`
static BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s+(.+)$").expect("BULLET_REGEX must compile"));

/// Parses markdown changelogs into a [`VersionHistory`].
///
/// Headings without a valid date get the parser's `today` value.
#[derive(Debug, Clone)]
pub struct ChangelogParser {
    today: String,
}

impl Default for ChangelogParser {
    fn default() -> Self {
        Self::new()
    }
}

struct OpenEntry {
    version: String,
    date: String,
    bucket: Option<ChangeType>,
    changes: Vec<ChangeNote>,
}

impl ChangelogParser {
    /// Parser that dates undated headings with the local calendar date.
    pub fn new() -> Self {
        Self::with_today(chrono::Local::now().format("%Y-%m-%d").to_string())
    }

    /// Parser with a fixed date for undated headings.
    pub fn with_today(today: impl Into<String>) -> Self {
        Self {
            today: today.into(),
        }
    }

    /// Date given to headings without one.
    pub fn today(&self) -> &str {
        &self.today
    }

    /// Parse a markdown document.
    pub fn parse(&self, markdown: &str) -> VersionHistory {
        let mut entries = Vec::new();
        let mut open: Option<OpenEntry> = None;

        for line in markdown.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = RELEASE_HEADING_REGEX.captures(line) {
                if let Some(done) = open.take() {
                    push_entry(&mut entries, done);
                }
                open = Some(OpenEntry {
                    version: caps[1].to_string(),
                    date: caps
                        .get(2)
                        .map(|m| m.as_str())
                        .filter(|date| is_iso_date(date))
                        .map_or_else(|| self.today.clone(), str::to_string),
                    bucket: None,
                    changes: Vec::new(),
                });
                continue;
            }

            let Some(current) = open.as_mut() else {
                continue;
            };

            if let Some(caps) = BUCKET_HEADING_REGEX.captures(line) {
                current.bucket = Some(ChangeType::from_label(&caps[1]));
            } else if let Some(note) = parse_bullet(line, current.bucket) {
                current.changes.push(note);
            }
        }

        if let Some(done) = open {
            push_entry(&mut entries, done);
        }

        VersionHistory::from_entries(entries)
    }
}

fn parse_bullet(line: &str, bucket: Option<ChangeType>) -> Option<ChangeNote> {
    if let Some(caps) = LABELLED_BULLET_REGEX.captures(line) {
        return Some(ChangeNote::new(
            ChangeType::from_label(&caps[1]),
            caps[2].trim(),
        ));
    }

    let caps = BULLET_REGEX.captures(line)?;
    let text = caps[1].trim();
    // The formatter escapes a leading `[` or `\`.
    let text = text.strip_prefix('\\').unwrap_or(text);
    Some(ChangeNote::new(bucket.unwrap_or(ChangeType::Other), text))
}

fn push_entry(entries: &mut Vec<ReleaseEntry>, open: OpenEntry) {
    // The heading regex only captures release-shaped versions.
    match ReleaseEntry::new(open.version, open.date, open.changes) {
        Ok(entry) => entries.push(entry),
        Err(e) => tracing::debug!("Dropping changelog entry: {}", e),
    }
}

/// Parse a markdown changelog, dating undated headings with today.
pub fn parse_changelog(markdown: &str) -> VersionHistory {
    ChangelogParser::new().parse(markdown)
}
