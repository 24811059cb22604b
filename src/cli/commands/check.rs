//! Check command implementation.
//!
//! The `fontview check` command asks the configured update source for the
//! latest version.

use std::path::{Path, PathBuf};

use crate::changelog::CURRENT_VERSION;
use crate::cli::args::CheckArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::updates::{show_update_notification, source_for, UpdateChecker};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root)?;
        let current = self
            .args
            .current
            .clone()
            .unwrap_or_else(|| config.current_version.clone());

        let checker = UpdateChecker::new(source_for(&config), CURRENT_VERSION);
        ui.message(&format!(
            "Checking for updates ({} channel, {} source)",
            config.channel,
            checker.source_name()
        ));

        let info = checker.check_for_update(&current);
        if info.source == "bundled" {
            ui.warning("Update source unavailable, compared against the bundled version");
        }

        if self.args.json {
            ui.output(&serde_json::to_string_pretty(&info)?);
        } else {
            show_update_notification(ui, &info);
        }

        Ok(CommandResult::success())
    }
}
