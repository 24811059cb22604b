//! Where update information comes from.
//!
//! The checker only sees the [`UpdateSource`] trait. The source is
//! chosen once from configuration: development builds simulate the
//! remote, production builds read the updater manifest published with
//! each GitHub release.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;

use crate::config::{AppConfig, Channel};

/// User agent sent with remote requests.
pub const USER_AGENT: &str = concat!("fontview/", env!("CARGO_PKG_VERSION"));

/// Description of the latest available release.
///
/// Matches the `latest.json` updater manifest; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
}

impl Manifest {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            notes: None,
            pub_date: None,
        }
    }
}

/// A remote manifest provider.
pub trait UpdateSource {
    /// Short name used in logs and results.
    fn name(&self) -> &str;

    /// Fetch the latest manifest.
    fn latest(&self) -> Result<Manifest>;
}

/// Development source: waits, then reports a fixed version.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    version: String,
    delay: Duration,
}

impl SimulatedSource {
    pub fn new(version: impl Into<String>, delay: Duration) -> Self {
        Self {
            version: version.into(),
            delay,
        }
    }
}

impl UpdateSource for SimulatedSource {
    fn name(&self) -> &str {
        "simulated"
    }

    fn latest(&self) -> Result<Manifest> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(Manifest::new(self.version.clone()))
    }
}

/// Production source: the release's `latest.json` manifest over HTTP.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    url: String,
    timeout: Duration,
}

impl ManifestSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl UpdateSource for ManifestSource {
    fn name(&self) -> &str {
        "manifest"
    }

    fn latest(&self) -> Result<Manifest> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()?;

        let response = client.get(&self.url).send()?;
        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), self.url);
        }

        let manifest: Manifest = response
            .json()
            .context("Failed to parse update manifest")?;

        if manifest.version.trim().is_empty() {
            bail!("Update manifest has an empty version");
        }

        Ok(manifest)
    }
}

/// Select the update source for the configured channel.
pub fn source_for(config: &AppConfig) -> Box<dyn UpdateSource> {
    match config.channel {
        Channel::Development => {
            tracing::debug!("Using simulated update source");
            // Reports the running version so development never sees an update.
            Box::new(SimulatedSource::new(
                config.current_version.clone(),
                config.simulated_delay(),
            ))
        }
        Channel::Production => {
            let url = config.urls().latest_manifest();
            tracing::debug!("Using update manifest at {}", url);
            Box::new(ManifestSource::new(url, config.request_timeout()))
        }
    }
}
