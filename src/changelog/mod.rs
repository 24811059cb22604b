//! Changelog model, rendering and parsing.
//!
//! This module provides:
//! - [`ReleaseEntry`] and [`VersionHistory`], the release record model
//! - [`format_changelog`] to render a history as markdown
//! - [`ChangelogParser`] to read markdown back into a history
//! - [`UpdateLog`] for the `UPDATE_LOG.md` release notes file
//!
//! # Example
//!
//! ```
//! use fontview::changelog::{
//!     format_changelog, ChangeNote, ChangeType, ChangelogParser, ReleaseEntry, VersionHistory,
//! };
//!
//! let entry = ReleaseEntry::new(
//!     "v1.0.1",
//!     "2025-04-12",
//!     vec![ChangeNote::new(ChangeType::Feature, "Commercial-use tags")],
//! )
//! .unwrap();
//! let history = VersionHistory::new().prepend(entry);
//!
//! let markdown = format_changelog(&history, 0);
//! assert!(markdown.contains("## v1.0.1 (2025-04-12)"));
//!
//! let parsed = ChangelogParser::with_today("2025-04-12").parse(&markdown);
//! assert_eq!(parsed, history);
//! ```

pub mod bundled;
pub mod entry;
pub mod format;
pub mod parse;
pub mod update_log;

pub use bundled::{bundled_history, CURRENT_VERSION};
pub use entry::{
    is_iso_date, ChangeNote, ChangeType, ReleaseEntry, VersionHistory, DEFAULT_RELEASE_NOTE,
};
pub use format::{format_changelog, format_entry, CHANGELOG_TITLE};
pub use parse::{parse_changelog, ChangelogParser};
pub use update_log::{UpdateLog, UPDATE_LOG_FILE, UPDATE_LOG_TEMPLATE};
