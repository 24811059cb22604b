//! Notes command implementation.
//!
//! The `fontview notes` command prints the update log section for a tag,
//! as used for GitHub release bodies.

use std::path::{Path, PathBuf};

use crate::changelog::{UpdateLog, UPDATE_LOG_FILE};
use crate::cli::args::NotesArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{resolve_path, Command, CommandResult};

/// The notes command implementation.
pub struct NotesCommand {
    project_root: PathBuf,
    args: NotesArgs,
}

impl NotesCommand {
    pub fn new(project_root: &Path, args: NotesArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn log_path(&self) -> PathBuf {
        match &self.args.update_log {
            Some(path) => resolve_path(&self.project_root, path),
            None => self.project_root.join(UPDATE_LOG_FILE),
        }
    }
}

impl Command for NotesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.log_path();
        let log = UpdateLog::load(&path)?;

        match log.section(&self.args.tag) {
            Some(body) => {
                ui.output(&body);
                Ok(CommandResult::success())
            }
            None => {
                ui.error(&format!(
                    "No section for {} in {}",
                    self.args.tag,
                    path.display()
                ));
                Ok(CommandResult::failure(2))
            }
        }
    }
}
