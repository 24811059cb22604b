//! Update-check orchestration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::source::UpdateSource;
use crate::version::{ensure_prefix, is_newer_version, is_release_version};

/// Result of an update check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInfo {
    /// Version the user would update to (or the current one).
    pub version: String,
    /// Whether `version` is newer than `current_version`.
    pub has_update: bool,
    /// Version the check was made for.
    pub current_version: String,
    /// Name of the source that answered, or `bundled` after a fallback.
    pub source: String,
    /// When the check was performed.
    pub checked_at: DateTime<Utc>,
}

/// Decides whether an update notification should surface.
///
/// Checks are advisory: when the source fails the checker compares
/// against the version bundled into the build instead of failing.
pub struct UpdateChecker {
    source: Box<dyn UpdateSource>,
    bundled_version: String,
}

impl UpdateChecker {
    pub fn new(source: Box<dyn UpdateSource>, bundled_version: impl Into<String>) -> Self {
        Self {
            source,
            bundled_version: bundled_version.into(),
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn bundled_version(&self) -> &str {
        &self.bundled_version
    }

    /// Check whether a newer version than `current_version` exists.
    pub fn check_for_update(&self, current_version: &str) -> UpdateInfo {
        tracing::debug!(
            "Checking for updates via {} (current {})",
            self.source.name(),
            current_version
        );

        let latest = self.source.latest().and_then(|manifest| {
            let version = ensure_prefix(manifest.version.trim());
            if is_release_version(&version) {
                Ok(version)
            } else {
                anyhow::bail!("malformed version '{}' in manifest", manifest.version)
            }
        });

        match latest {
            Ok(version) => {
                let has_update = is_newer_version(&version, current_version);
                tracing::info!(
                    "Version check: current={}, latest={}, update={}",
                    current_version,
                    version,
                    has_update
                );

                UpdateInfo {
                    version,
                    has_update,
                    current_version: current_version.to_string(),
                    source: self.source.name().to_string(),
                    checked_at: Utc::now(),
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Update check via {} failed, using bundled version: {:#}",
                    self.source.name(),
                    e
                );
                self.fallback(current_version)
            }
        }
    }

    fn fallback(&self, current_version: &str) -> UpdateInfo {
        let has_update = is_newer_version(&self.bundled_version, current_version);
        let version = if has_update {
            self.bundled_version.clone()
        } else {
            current_version.to_string()
        };

        UpdateInfo {
            version,
            has_update,
            current_version: current_version.to_string(),
            source: "bundled".to_string(),
            checked_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::updates::source::{Manifest, SimulatedSource};
    use std::time::Duration;

    struct FailingSource;

    impl UpdateSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn latest(&self) -> anyhow::Result<Manifest> {
            anyhow::bail!("network unreachable")
        }
    }

    fn simulated(version: &str) -> Box<dyn UpdateSource> {
        Box::new(SimulatedSource::new(version, Duration::ZERO))
    }

    #[test]
    fn newer_remote_version_is_update() {
        let checker = UpdateChecker::new(simulated("v1.0.1"), "v1.0.0");
        let info = checker.check_for_update("v1.0.0");

        assert!(info.has_update);
        assert_eq!(info.version, "v1.0.1");
        assert_eq!(info.current_version, "v1.0.0");
        assert_eq!(info.source, "simulated");
    }

    #[test]
    fn same_version_is_not_update() {
        let checker = UpdateChecker::new(simulated("v1.0.1"), "v1.0.1");
        let info = checker.check_for_update("v1.0.1");
        assert!(!info.has_update);
        assert_eq!(info.version, "v1.0.1");
    }

    #[test]
    fn manifest_version_gets_prefix() {
        let checker = UpdateChecker::new(simulated("1.2.0"), "v1.0.1");
        let info = checker.check_for_update("v1.0.1");
        assert_eq!(info.version, "v1.2.0");
        assert!(info.has_update);
    }

    #[test]
    fn older_remote_version_is_not_update() {
        let checker = UpdateChecker::new(simulated("v0.9.0"), "v1.0.1");
        assert!(!checker.check_for_update("v1.0.0").has_update);
    }

    #[test]
    fn width_difference_uses_segment_order() {
        let checker = UpdateChecker::new(simulated("v1.10.0"), "v1.0.0");
        assert!(checker.check_for_update("v1.9.0").has_update);
    }

    #[test]
    fn failure_falls_back_to_bundled_no_update() {
        let checker = UpdateChecker::new(Box::new(FailingSource), "v1.0.1");
        let info = checker.check_for_update("v1.0.1");

        assert!(!info.has_update);
        assert_eq!(info.version, "v1.0.1");
        assert_eq!(info.source, "bundled");
    }

    #[test]
    fn failure_falls_back_to_newer_bundled() {
        let checker = UpdateChecker::new(Box::new(FailingSource), "v1.0.1");
        let info = checker.check_for_update("v1.0.0");

        assert!(info.has_update);
        assert_eq!(info.version, "v1.0.1");
        assert_eq!(info.current_version, "v1.0.0");
    }

    #[test]
    fn malformed_version_falls_back_to_bundled() {
        let checker = UpdateChecker::new(simulated("latest"), "v1.0.2");
        let info = checker.check_for_update("v1.0.1");

        assert!(info.has_update);
        assert_eq!(info.version, "v1.0.2");
        assert_eq!(info.source, "bundled");
    }

    #[test]
    fn partial_version_falls_back_to_bundled() {
        let checker = UpdateChecker::new(simulated("1.1"), "v1.0.1");
        let info = checker.check_for_update("v1.0.1");

        assert!(!info.has_update);
        assert_eq!(info.version, "v1.0.1");
        assert_eq!(info.source, "bundled");
    }

    #[test]
    fn update_info_serialization() {
        let checker = UpdateChecker::new(simulated("v1.0.1"), "v1.0.1");
        let info = checker.check_for_update("v1.0.0");

        let json = serde_json::to_string(&info).unwrap();
        let parsed: UpdateInfo = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.version, info.version);
        assert_eq!(parsed.has_update, info.has_update);
        assert_eq!(parsed.current_version, info.current_version);
    }
}
