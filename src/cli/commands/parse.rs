//! Parse command implementation.
//!
//! The `fontview parse` command reads a markdown changelog and prints the
//! history it describes as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use crate::changelog::ChangelogParser;
use crate::cli::args::ParseArgs;
use crate::error::{FontviewError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{resolve_path, Command, CommandResult};

/// The parse command implementation.
pub struct ParseCommand {
    project_root: PathBuf,
    args: ParseArgs,
}

impl ParseCommand {
    pub fn new(project_root: &Path, args: ParseArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn parser(&self) -> ChangelogParser {
        match &self.args.today {
            Some(today) => ChangelogParser::with_today(today.clone()),
            None => ChangelogParser::new(),
        }
    }
}

impl Command for ParseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = resolve_path(&self.project_root, &self.args.file);
        let markdown = fs::read_to_string(&path).map_err(|e| FontviewError::HistoryError {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let history = self.parser().parse(&markdown);
        if history.is_empty() {
            ui.warning(&format!("No release headings found in {}", path.display()));
        }

        ui.output(&history.to_json()?);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::VersionHistory;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn args(file: &str, today: Option<&str>) -> ParseArgs {
        ParseArgs {
            file: PathBuf::from(file),
            today: today.map(String::from),
        }
    }

    #[test]
    fn prints_history_json() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("CHANGELOG.md"),
            "# Changelog\n\n## v1.2.0\n\n### ✨ New Features\n\n- Glyph grid\n",
        )
        .unwrap();

        let cmd = ParseCommand::new(temp.path(), args("CHANGELOG.md", Some("2024-05-01")));
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let history = VersionHistory::from_json(&ui.output_text()).unwrap();
        let entry = history.latest().unwrap();
        assert_eq!(entry.version(), "v1.2.0");
        assert_eq!(entry.date(), "2024-05-01");
        assert_eq!(entry.changes()[0].text(), "Glyph grid");
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn headingless_file_warns() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.md"), "just some text\n").unwrap();

        let cmd = ParseCommand::new(temp.path(), args("notes.md", None));
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.output_text(), "[]");
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let cmd = ParseCommand::new(temp.path(), args("nope.md", None));
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
    }
}
