//! Release command implementation.
//!
//! The `fontview release` command bumps the highest known version and
//! records the new release in the history file and update log.

use std::path::{Path, PathBuf};

use crate::changelog::{UpdateLog, VersionHistory};
use crate::cli::args::ReleaseArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::release::{record_release, ReleasePlan};
use crate::ui::UserInterface;
use crate::version::BumpKind;

use super::dispatcher::{resolve_path, Command, CommandResult};

/// The release command implementation.
pub struct ReleaseCommand {
    project_root: PathBuf,
    args: ReleaseArgs,
}

impl ReleaseCommand {
    pub fn new(project_root: &Path, args: ReleaseArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn date(&self) -> String {
        self.args
            .date
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string())
    }
}

impl Command for ReleaseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let kind: BumpKind = self.args.bump.parse()?;
        let config = load_config(&self.project_root)?;

        let history_path = resolve_path(&self.project_root, &self.args.history);
        let history = if history_path.exists() {
            VersionHistory::load(&history_path)?
        } else {
            tracing::debug!("Starting new history at {}", history_path.display());
            VersionHistory::new()
        };

        let mut declared = vec![config.current_version.as_str()];
        if let Some(latest) = history.latest() {
            declared.push(latest.version());
        }
        let plan = ReleasePlan::new(declared, kind)?;
        let tag = plan.tag();

        let log_path = self
            .args
            .update_log
            .as_ref()
            .map(|path| resolve_path(&self.project_root, path));
        let update_log = match &log_path {
            Some(path) => UpdateLog::load(path)?,
            None => UpdateLog::default(),
        };

        let recorded = record_release(&history, &update_log, &plan, &self.date())?;
        recorded.history.save(&history_path)?;

        if let Some(path) = &log_path {
            match &recorded.update_log {
                Some(log) => log.save(path)?,
                None => ui.warning(&format!(
                    "{} already has a section for {}",
                    path.display(),
                    tag
                )),
            }
        }

        ui.success(&format!("Recorded {} ({} bump from {})", tag, kind, plan.base));
        ui.output(&tag);
        Ok(CommandResult::success())
    }
}
