//! Fetch-changelog command implementation.
//!
//! The `fontview fetch-changelog` command resolves the published changelog
//! for the configured channel and renders it.

use std::path::{Path, PathBuf};

use crate::changelog::format_changelog;
use crate::cli::args::FetchChangelogArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::updates::{ChangelogFetcher, ChangelogState};

use super::dispatcher::{Command, CommandResult};

/// The fetch-changelog command implementation.
pub struct FetchChangelogCommand {
    project_root: PathBuf,
    args: FetchChangelogArgs,
}

impl FetchChangelogCommand {
    pub fn new(project_root: &Path, args: FetchChangelogArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for FetchChangelogCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root)?;
        let fetcher = ChangelogFetcher::from_config(&config);

        let state = ChangelogState::bundled().refreshed(&fetcher);
        let history = state.current();

        ui.output(&format_changelog(&history, self.args.limit));
        Ok(CommandResult::success())
    }
}
