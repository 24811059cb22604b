//! User-facing update notices.

use super::check::UpdateInfo;
use crate::changelog::{ReleaseEntry, VersionHistory};
use crate::store::{KeyValueStore, StorageKey};
use crate::ui::UserInterface;
use crate::version::compare;

/// Tracks the last version the app ran as, to show "what's new" once
/// after an upgrade.
pub struct WhatsNew<'a> {
    store: &'a KeyValueStore,
}

impl<'a> WhatsNew<'a> {
    pub fn new(store: &'a KeyValueStore) -> Self {
        Self { store }
    }

    /// Version recorded by the previous run.
    pub fn last_run_version(&self) -> Option<String> {
        self.store.get(StorageKey::LastRunVersion)
    }

    /// Record `current` and return the release to announce, if any.
    ///
    /// The first run only records the version. A later run with a
    /// different version returns the newest history entry.
    pub fn check(&self, current: &str, history: &VersionHistory) -> Option<ReleaseEntry> {
        let previous = self.last_run_version();
        self.store.set(StorageKey::LastRunVersion, current);

        match previous {
            None => {
                tracing::debug!("First run as {}", current);
                None
            }
            Some(previous) if compare(&previous, current) == 0 => None,
            Some(previous) => {
                tracing::info!("Version changed from {} to {}", previous, current);
                history.latest().cloned()
            }
        }
    }
}

/// Tell the user about an available update.
pub fn show_update_notification(ui: &mut dyn UserInterface, info: &UpdateInfo) {
    if info.has_update {
        ui.message(&format!(
            "Update available: {} -> {}",
            info.current_version, info.version
        ));
    } else {
        ui.success(&format!("{} is the latest version", info.current_version));
    }
}
