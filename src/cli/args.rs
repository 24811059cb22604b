//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fontview - Release metadata, changelog and update checks.
#[derive(Debug, Parser)]
#[command(name = "fontview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Only print command output and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two versions, printing 1, 0 or -1
    Compare(CompareArgs),

    /// Render a version history as markdown
    Changelog(ChangelogArgs),

    /// Parse a markdown changelog into JSON
    Parse(ParseArgs),

    /// Check whether a newer version is available
    Check(CheckArgs),

    /// Fetch the published changelog, falling back when offline
    FetchChangelog(FetchChangelogArgs),

    /// Record the next release in the history and update log
    Release(ReleaseArgs),

    /// Print the update log notes for a release tag
    Notes(NotesArgs),

    /// Show what changed since the last run
    WhatsNew(WhatsNewArgs),
}

/// Arguments for the `compare` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompareArgs {
    /// First version
    pub a: String,

    /// Second version
    pub b: String,
}

/// Arguments for the `changelog` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ChangelogArgs {
    /// JSON history file (defaults to the bundled history)
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Render only the newest N entries (0 renders all)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,
}

/// Arguments for the `parse` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ParseArgs {
    /// Markdown changelog to parse
    pub file: PathBuf,

    /// Date given to entries whose heading has none
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Version to check for (defaults to the configured version)
    #[arg(long)]
    pub current: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `fetch-changelog` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FetchChangelogArgs {
    /// Render only the newest N entries (0 renders all)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,
}

/// Arguments for the `release` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ReleaseArgs {
    /// Version component to increment (major, minor, patch)
    #[arg(short, long, default_value = "patch")]
    pub bump: String,

    /// JSON history file to record the release in
    #[arg(long)]
    pub history: PathBuf,

    /// Update log to add the release section to
    #[arg(long)]
    pub update_log: Option<PathBuf>,

    /// Release date (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `notes` command.
#[derive(Debug, Clone, clap::Args)]
pub struct NotesArgs {
    /// Release tag, e.g. v1.0.1
    pub tag: String,

    /// Update log to read (defaults to UPDATE_LOG.md in the project)
    #[arg(long)]
    pub update_log: Option<PathBuf>,
}

/// Arguments for the `whats-new` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WhatsNewArgs {
    /// Version the app is running as (defaults to the configured version)
    #[arg(long)]
    pub current: Option<String>,
}
