//! Release history shipped with the application.

use super::entry::{ChangeNote, ChangeType, ReleaseEntry, VersionHistory, DEFAULT_RELEASE_NOTE};

/// Version of the running application, `v`-prefixed.
pub const CURRENT_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

const BUNDLED: &[(&str, &str, &[(ChangeType, &str)])] = &[
    (
        "v1.0.1",
        "2025-04-12",
        &[(ChangeType::Feature, DEFAULT_RELEASE_NOTE)],
    ),
    (
        "v1.0.0",
        "2025-04-12",
        &[(ChangeType::Feature, DEFAULT_RELEASE_NOTE)],
    ),
    ("v0.0.0", "2025-04-12", &[(ChangeType::Other, "Version reset")]),
    (
        "v0.0.3",
        "2025-04-12",
        &[(ChangeType::Feature, DEFAULT_RELEASE_NOTE)],
    ),
    (
        "v0.0.2",
        "2025-04-12",
        &[(ChangeType::Feature, DEFAULT_RELEASE_NOTE)],
    ),
    ("v0.0.1", "2025-04-03", &[(ChangeType::Feature, "Initial release")]),
    (
        "v0.0.0",
        "2025-04-03",
        &[
            (ChangeType::Feature, "Initial release"),
            (ChangeType::Feature, "Browse installed system fonts"),
            (ChangeType::Feature, "Custom preview text"),
        ],
    ),
];

/// The history bundled into this build, newest first.
pub fn bundled_history() -> VersionHistory {
    let entries = BUNDLED
        .iter()
        .filter_map(|(version, date, changes)| {
            let notes = changes
                .iter()
                .map(|(change_type, text)| ChangeNote::new(*change_type, *text))
                .collect();
            ReleaseEntry::new(*version, *date, notes).ok()
        })
        .collect();

    VersionHistory::from_entries(entries)
}
