//! Command-line interface for fontview.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    ChangelogArgs, CheckArgs, Cli, Commands, CompareArgs, FetchChangelogArgs, NotesArgs,
    ParseArgs, ReleaseArgs, WhatsNewArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
