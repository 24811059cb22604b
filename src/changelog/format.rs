//! Markdown rendering of a version history.

use super::entry::{ChangeType, ReleaseEntry, VersionHistory};

/// Title line of a rendered changelog.
pub const CHANGELOG_TITLE: &str = "# Changelog";

/// Render a history to markdown.
///
/// Only the first `limit` entries are rendered when `limit > 0`. Each
/// entry gets a `## {version} ({date})` heading and one `###` section
/// per non-empty change bucket, in feature, improvement, fix, other
/// order.
pub fn format_changelog(history: &VersionHistory, limit: usize) -> String {
    let mut markdown = format!("{}\n\n", CHANGELOG_TITLE);

    for entry in history.take(limit) {
        write_entry(&mut markdown, entry);
    }

    markdown
}

/// Render a single entry, without the document title.
pub fn format_entry(entry: &ReleaseEntry) -> String {
    let mut markdown = String::new();
    write_entry(&mut markdown, entry);
    markdown
}

fn write_entry(out: &mut String, entry: &ReleaseEntry) {
    out.push_str(&format!("## {} ({})\n\n", entry.version(), entry.date()));

    for change_type in ChangeType::ALL {
        let mut changes = entry.changes_of(change_type).peekable();
        if changes.peek().is_none() {
            continue;
        }

        out.push_str(&format!("### {}\n\n", change_type.heading()));
        for change in changes {
            out.push_str(&format!("- {}\n", escape_bullet(change.text())));
        }
        out.push('\n');
    }
}

// A bullet starting with `[` would read back as a labelled bullet, and
// the parser drops one leading `\`.
fn escape_bullet(text: &str) -> String {
    if text.starts_with('[') || text.starts_with('\\') {
        format!("\\{}", text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::entry::ChangeNote;

    fn entry(version: &str, changes: Vec<ChangeNote>) -> ReleaseEntry {
        ReleaseEntry::new(version, "2025-04-12", changes).unwrap()
    }

    #[test]
    fn formats_single_feature() {
        let history = VersionHistory::from_entries(vec![entry(
            "v1.0.1",
            vec![ChangeNote::new(ChangeType::Feature, "X")],
        )]);

        let markdown = format_changelog(&history, 0);

        assert!(markdown.contains("## v1.0.1 (2025-04-12)"));
        assert!(markdown.contains("### ✨ New Features"));
        assert!(markdown.contains("- X\n"));
    }

    #[test]
    fn exact_layout() {
        let history = VersionHistory::from_entries(vec![entry(
            "v1.0.0",
            vec![
                ChangeNote::new(ChangeType::Fix, "crash on start"),
                ChangeNote::new(ChangeType::Feature, "favorites"),
            ],
        )]);

        let expected = "# Changelog\n\n\
                        ## v1.0.0 (2025-04-12)\n\n\
                        ### ✨ New Features\n\n\
                        - favorites\n\n\
                        ### 🐛 Bug Fixes\n\n\
                        - crash on start\n\n";
        assert_eq!(format_changelog(&history, 0), expected);
    }

    #[test]
    fn empty_buckets_emit_nothing() {
        let history = VersionHistory::from_entries(vec![entry(
            "v1.0.0",
            vec![ChangeNote::new(ChangeType::Other, "reset")],
        )]);

        let markdown = format_changelog(&history, 0);

        assert!(markdown.contains("### Other Changes"));
        assert!(!markdown.contains("New Features"));
        assert!(!markdown.contains("Improvements"));
        assert!(!markdown.contains("Bug Fixes"));
    }

    #[test]
    fn bucket_order_is_fixed() {
        let history = VersionHistory::from_entries(vec![entry(
            "v1.0.0",
            vec![
                ChangeNote::new(ChangeType::Other, "o"),
                ChangeNote::new(ChangeType::Fix, "f"),
                ChangeNote::new(ChangeType::Improvement, "i"),
                ChangeNote::new(ChangeType::Feature, "n"),
            ],
        )]);

        let markdown = format_changelog(&history, 0);
        let feature = markdown.find("New Features").unwrap();
        let improvement = markdown.find("Improvements").unwrap();
        let fix = markdown.find("Bug Fixes").unwrap();
        let other = markdown.find("Other Changes").unwrap();

        assert!(feature < improvement && improvement < fix && fix < other);
    }

    #[test]
    fn limit_renders_first_entries() {
        let history = VersionHistory::from_entries(vec![
            entry("v1.0.1", vec![]),
            entry("v1.0.0", vec![]),
        ]);

        let markdown = format_changelog(&history, 1);

        assert!(markdown.contains("## v1.0.1"));
        assert!(!markdown.contains("## v1.0.0"));
    }

    #[test]
    fn empty_history_is_title_only() {
        assert_eq!(format_changelog(&VersionHistory::new(), 0), "# Changelog\n\n");
    }

    #[test]
    fn bracketed_text_is_escaped() {
        let e = entry(
            "v1.0.0",
            vec![ChangeNote::new(ChangeType::Feature, "[beta] grid view")],
        );
        assert!(format_entry(&e).contains("- \\[beta] grid view\n"));
    }

    #[test]
    fn backslash_text_is_escaped() {
        let e = entry(
            "v1.0.0",
            vec![ChangeNote::new(ChangeType::Fix, "\\[x] path")],
        );
        assert!(format_entry(&e).contains("- \\\\[x] path\n"));
    }

    #[test]
    fn multi_line_note_renders_one_bullet() {
        let e = entry(
            "v1.0.0",
            vec![ChangeNote::new(ChangeType::Fix, "a\n## v9.9.9 (2030-01-01)")],
        );
        let markdown = format_entry(&e);
        assert!(markdown.contains("- a ## v9.9.9 (2030-01-01)\n"));
        assert_eq!(markdown.matches("\n## ").count(), 0);
    }

    #[test]
    fn output_is_deterministic() {
        let history = VersionHistory::from_entries(vec![entry(
            "v1.0.0",
            vec![ChangeNote::new(ChangeType::Improvement, "faster search")],
        )]);
        assert_eq!(format_changelog(&history, 0), format_changelog(&history, 0));
    }
}
