//! Configuration schema definitions for fontview.
//!
//! This module contains the structs that map to the YAML
//! configuration file format, plus the GitHub URLs derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::changelog::CURRENT_VERSION;

/// Root configuration structure for `.fontview/config.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Repository the app is released from.
    pub github: GithubConfig,

    /// Release channel deciding where update information comes from.
    pub channel: Channel,

    /// Version of the running app.
    pub current_version: String,

    /// Delay of the simulated update source, in milliseconds.
    pub simulated_delay_ms: u64,

    /// Timeout for remote requests, in seconds.
    pub request_timeout_secs: u64,

    /// Override for the key-value store file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            github: GithubConfig::default(),
            channel: Channel::default(),
            current_version: CURRENT_VERSION.to_string(),
            simulated_delay_ms: 800,
            request_timeout_secs: 10,
            store_path: None,
        }
    }
}

impl AppConfig {
    /// Environment variable overriding [`AppConfig::channel`].
    pub const CHANNEL_ENV: &'static str = "FONTVIEW_CHANNEL";

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn urls(&self) -> GithubUrls {
        GithubUrls::new(&self.github)
    }
}

/// GitHub repository coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub owner: String,
    pub repo: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            owner: "Chatterjay".to_string(),
            repo: "font-viewer".to_string(),
        }
    }
}

/// Release channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Local builds: update information is simulated.
    Development,
    /// Shipped builds: update information comes from GitHub.
    #[default]
    Production,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!("unknown channel: {}", s)),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URLs derived from the repository coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubUrls {
    repo: String,
    raw: String,
    api: String,
}

impl GithubUrls {
    pub fn new(github: &GithubConfig) -> Self {
        Self {
            repo: format!("https://github.com/{}/{}", github.owner, github.repo),
            raw: format!(
                "https://raw.githubusercontent.com/{}/{}",
                github.owner, github.repo
            ),
            api: format!(
                "https://api.github.com/repos/{}/{}",
                github.owner, github.repo
            ),
        }
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn api(&self) -> &str {
        &self.api
    }

    pub fn releases(&self) -> String {
        format!("{}/releases", self.repo)
    }

    pub fn latest_release(&self) -> String {
        format!("{}/latest", self.releases())
    }

    /// The updater manifest published with every release.
    pub fn latest_manifest(&self) -> String {
        format!("{}/latest/download/latest.json", self.releases())
    }

    pub fn changelog(&self) -> String {
        self.raw_url("CHANGELOG.md", "main")
    }

    /// Raw content URL for `path` on `branch`.
    pub fn raw_url(&self, path: &str, branch: &str) -> String {
        format!("{}/{}/{}", self.raw, branch, path)
    }

    /// Download URL of a release asset.
    pub fn release_asset_url(&self, tag: &str, asset: &str) -> String {
        format!("{}/download/{}/{}", self.releases(), tag, asset)
    }
}
