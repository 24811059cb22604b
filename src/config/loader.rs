//! Configuration file discovery and loading.
//!
//! Configuration is optional: with no files present every setting
//! takes its default.

use crate::config::merger::merge_configs;
use crate::config::schema::{AppConfig, Channel};
use crate::error::{FontviewError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding fontview configuration, both per user and per project.
pub const CONFIG_DIR: &str = ".fontview";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.fontview/config.yml`)
/// 2. Project config (`.fontview/config.yml`)
/// 3. Local overrides (`.fontview/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub user_global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir()
                .map(|home| home.join(CONFIG_DIR).join("config.yml"))
                .filter(|p| p.exists()),
            ..Self::discover_project(project_root)
        }
    }

    /// Discover only the project-level files.
    pub fn discover_project(project_root: &Path) -> Self {
        let dir = project_root.join(CONFIG_DIR);
        let existing = |name: &str| Some(dir.join(name)).filter(|p| p.exists());

        Self {
            user_global: None,
            project: existing("config.yml"),
            project_local: existing("config.local.yml"),
        }
    }

    /// All existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Load a config file as a raw YAML value.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FontviewError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FontviewError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| FontviewError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Merge the given config files into an [`AppConfig`].
pub fn load_from_paths(paths: &ConfigPaths) -> Result<AppConfig> {
    let mut layers = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        let value = load_config_value(path)?;
        // An empty file parses to null.
        if !value.is_null() {
            layers.push(value);
        }
    }

    let merged = merge_configs(&layers);
    let origin = paths
        .all_existing()
        .last()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(CONFIG_DIR));

    serde_yaml::from_value(merged).map_err(|e| FontviewError::ConfigParseError {
        path: origin,
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Apply environment overrides to a loaded config.
pub fn apply_env_overrides(config: &mut AppConfig, channel: Option<&str>) -> Result<()> {
    if let Some(raw) = channel {
        config.channel = raw
            .parse::<Channel>()
            .map_err(|message| FontviewError::ConfigValidationError { message })?;
        tracing::debug!("Channel overridden to {}", config.channel);
    }
    Ok(())
}

/// Discover, merge and finalize the configuration for a project.
pub fn load_config(project_root: &Path) -> Result<AppConfig> {
    let mut config = load_from_paths(&ConfigPaths::discover(project_root))?;
    let channel = std::env::var(AppConfig::CHANNEL_ENV).ok();
    apply_env_overrides(&mut config, channel.as_deref())?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project_with(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
        temp
    }

    #[test]
    fn discover_finds_project_files() {
        let temp = project_with(&[("config.yml", ""), ("config.local.yml", "")]);
        let paths = ConfigPaths::discover_project(temp.path());
        assert!(paths.project.is_some());
        assert!(paths.project_local.is_some());
        assert_eq!(paths.all_existing().len(), 2);
    }

    #[test]
    fn discover_missing_files() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover_project(temp.path());
        assert!(paths.all_existing().is_empty());
    }

    #[test]
    fn no_files_gives_defaults() {
        let config = load_from_paths(&ConfigPaths::default()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn empty_file_gives_defaults() {
        let temp = project_with(&[("config.yml", "")]);
        let config = load_from_paths(&ConfigPaths::discover_project(temp.path())).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn local_overrides_project() {
        let temp = project_with(&[
            ("config.yml", "channel: development\nsimulated_delay_ms: 5\n"),
            ("config.local.yml", "simulated_delay_ms: 0\n"),
        ]);
        let config = load_from_paths(&ConfigPaths::discover_project(temp.path())).unwrap();
        assert_eq!(config.channel, Channel::Development);
        assert_eq!(config.simulated_delay_ms, 0);
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = project_with(&[("config.yml", "channel: [unclosed")]);
        let result = load_from_paths(&ConfigPaths::discover_project(temp.path()));
        assert!(matches!(
            result,
            Err(FontviewError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn unknown_channel_is_parse_error() {
        let temp = project_with(&[("config.yml", "channel: nightly\n")]);
        let result = load_from_paths(&ConfigPaths::discover_project(temp.path()));
        assert!(matches!(
            result,
            Err(FontviewError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_config_value(&temp.path().join("nope.yml"));
        assert!(matches!(result, Err(FontviewError::ConfigNotFound { .. })));
    }

    #[test]
    fn env_override_sets_channel() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, Some("dev")).unwrap();
        assert_eq!(config.channel, Channel::Development);
    }

    #[test]
    fn env_override_rejects_unknown_channel() {
        let mut config = AppConfig::default();
        let result = apply_env_overrides(&mut config, Some("nightly"));
        assert!(matches!(
            result,
            Err(FontviewError::ConfigValidationError { .. })
        ));
        assert_eq!(config.channel, Channel::Production);
    }

    #[test]
    fn env_override_absent_keeps_config() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, None).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
