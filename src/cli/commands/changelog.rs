//! Changelog command implementation.
//!
//! The `fontview changelog` command renders a version history as markdown.

use std::path::{Path, PathBuf};

use crate::changelog::{bundled_history, format_changelog, VersionHistory};
use crate::cli::args::ChangelogArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{resolve_path, Command, CommandResult};

/// The changelog command implementation.
pub struct ChangelogCommand {
    project_root: PathBuf,
    args: ChangelogArgs,
}

impl ChangelogCommand {
    pub fn new(project_root: &Path, args: ChangelogArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn history(&self) -> Result<VersionHistory> {
        match &self.args.history {
            Some(path) => VersionHistory::load(&resolve_path(&self.project_root, path)),
            None => Ok(bundled_history()),
        }
    }
}

impl Command for ChangelogCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let history = self.history()?;
        ui.output(&format_changelog(&history, self.args.limit));
        Ok(CommandResult::success())
    }
}
