//! What's-new command implementation.
//!
//! The `fontview whats-new` command shows the newest release notes once
//! after the app's version changes.

use std::path::{Path, PathBuf};

use crate::changelog::{bundled_history, format_entry};
use crate::cli::args::WhatsNewArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::ui::UserInterface;
use crate::updates::WhatsNew;

use super::dispatcher::{resolve_path, Command, CommandResult};

/// The whats-new command implementation.
pub struct WhatsNewCommand {
    project_root: PathBuf,
    args: WhatsNewArgs,
}

impl WhatsNewCommand {
    pub fn new(project_root: &Path, args: WhatsNewArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for WhatsNewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root)?;
        let current = self
            .args
            .current
            .clone()
            .unwrap_or_else(|| config.current_version.clone());

        let store = match &config.store_path {
            Some(path) => KeyValueStore::new(resolve_path(&self.project_root, path)),
            None => KeyValueStore::open_default(),
        };

        match WhatsNew::new(&store).check(&current, &bundled_history()) {
            Some(entry) => {
                ui.show_header(&format!("What's new in {}", current));
                ui.output(&format_entry(&entry));
            }
            None => ui.message(&format!("Nothing new since the last run of {}", current)),
        }

        Ok(CommandResult::success())
    }
}
