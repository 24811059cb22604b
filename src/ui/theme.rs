//! Visual theme and styling.

use console::Style;

/// fontview's visual theme.
#[derive(Debug, Clone)]
pub struct FontviewTheme {
    /// Success messages (green).
    pub success: Style,
    /// Warning messages (yellow).
    pub warning: Style,
    /// Error messages (red bold).
    pub error: Style,
    /// Secondary text.
    pub dim: Style,
    /// Important text (bold).
    pub highlight: Style,
    /// Headers (cyan bold).
    pub header: Style,
}

impl Default for FontviewTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FontviewTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().cyan().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("Aa"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_success() {
        let msg = FontviewTheme::plain().format_success("Recorded v1.0.2");
        assert_eq!(msg, "✓ Recorded v1.0.2");
    }

    #[test]
    fn plain_theme_formats_warning_and_error() {
        let theme = FontviewTheme::plain();
        assert_eq!(theme.format_warning("offline"), "⚠ offline");
        assert_eq!(theme.format_error("bad version"), "✗ bad version");
    }

    #[test]
    fn plain_theme_formats_header() {
        let msg = FontviewTheme::plain().format_header("Changelog");
        assert_eq!(msg, "Aa Changelog");
    }
}
