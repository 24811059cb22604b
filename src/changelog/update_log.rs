//! The release notes file kept next to the app (`UPDATE_LOG.md`).
//!
//! Sections start at `## vX.Y.Z` headings and run until the next
//! heading. Recording a release inserts a new section right below the
//! title so the newest release is always on top.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use super::entry::DEFAULT_RELEASE_NOTE;
use crate::error::Result;

/// Default file name of the update log.
pub const UPDATE_LOG_FILE: &str = "UPDATE_LOG.md";

/// Content of a freshly created update log.
pub const UPDATE_LOG_TEMPLATE: &str = "# Update Log\n\n";

static SECTION_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^## v[\d.]+").expect("SECTION_HEADING_REGEX must compile")
});

/// A parsed update log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateLog {
    content: String,
}

impl Default for UpdateLog {
    fn default() -> Self {
        Self::parse(UPDATE_LOG_TEMPLATE)
    }
}

impl UpdateLog {
    pub fn parse(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// Load the log, starting from the template when the file is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("{} does not exist, starting a new log", path.display());
            return Ok(Self::default());
        }

        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.content)?;
        Ok(())
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// All sections as `(tag, body)` pairs, in file order.
    ///
    /// The body is the trimmed text between the heading and the next
    /// heading. A tag that appears twice keeps its first section.
    pub fn sections(&self) -> Vec<(String, String)> {
        let mut sections: Vec<(String, Vec<&str>)> = Vec::new();
        let mut current: Option<usize> = None;

        for line in self.content.split('\n') {
            if SECTION_HEADING_REGEX.is_match(line) {
                let tag = line[3..].trim().to_string();
                current = if sections.iter().any(|(t, _)| *t == tag) {
                    None
                } else {
                    sections.push((tag, Vec::new()));
                    Some(sections.len() - 1)
                };
                continue;
            }

            if let Some(index) = current {
                sections[index].1.push(line);
            }
        }

        sections
            .into_iter()
            .map(|(tag, lines)| (tag, lines.join("\n").trim().to_string()))
            .collect()
    }

    /// Body of the section for `tag`.
    pub fn section(&self, tag: &str) -> Option<String> {
        self.sections()
            .into_iter()
            .find(|(t, _)| t == tag)
            .map(|(_, body)| body)
    }

    /// Return a new log with a default section for `tag`.
    ///
    /// Returns `None` when the tag already has a section.
    pub fn with_release(&self, tag: &str) -> Option<UpdateLog> {
        if self.section(tag).is_some() {
            return None;
        }

        let new_section = format!("\n## {}\n- {}\n", tag, DEFAULT_RELEASE_NOTE);
        let lines: Vec<&str> = self.content.split('\n').collect();

        let content = if lines.len() <= 2 {
            format!("{}{}", self.content, new_section)
        } else {
            format!(
                "{}{}{}",
                lines[..2].join("\n"),
                new_section,
                lines[2..].join("\n")
            )
        };

        Some(Self { content })
    }
}
