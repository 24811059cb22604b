//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = &self.project_root;
        match &cli.command {
            Commands::Compare(args) => super::compare::CompareCommand::new(args.clone()).execute(ui),
            Commands::Changelog(args) => {
                super::changelog::ChangelogCommand::new(root, args.clone()).execute(ui)
            }
            Commands::Parse(args) => super::parse::ParseCommand::new(root, args.clone()).execute(ui),
            Commands::Check(args) => super::check::CheckCommand::new(root, args.clone()).execute(ui),
            Commands::FetchChangelog(args) => {
                super::fetch_changelog::FetchChangelogCommand::new(root, args.clone()).execute(ui)
            }
            Commands::Release(args) => {
                super::release::ReleaseCommand::new(root, args.clone()).execute(ui)
            }
            Commands::Notes(args) => super::notes::NotesCommand::new(root, args.clone()).execute(ui),
            Commands::WhatsNew(args) => {
                super::whats_new::WhatsNewCommand::new(root, args.clone()).execute(ui)
            }
        }
    }
}

/// Resolve a user-supplied path against the project root.
pub(crate) fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
