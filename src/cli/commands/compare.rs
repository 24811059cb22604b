//! Compare command implementation.
//!
//! The `fontview compare` command prints the ordering of two versions.

use crate::cli::args::CompareArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::version::compare;

use super::dispatcher::{Command, CommandResult};

/// The compare command implementation.
pub struct CompareCommand {
    args: CompareArgs,
}

impl CompareCommand {
    pub fn new(args: CompareArgs) -> Self {
        Self { args }
    }
}

impl Command for CompareCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ordering = compare(&self.args.a, &self.args.b);
        ui.output(&ordering.to_string());
        Ok(CommandResult::success())
    }
}
