//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations.

pub mod changelog;
pub mod check;
pub mod compare;
pub mod dispatcher;
pub mod fetch_changelog;
pub mod notes;
pub mod parse;
pub mod release;
pub mod whats_new;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
