//! Fetching the published changelog.
//!
//! Production builds try each [`ChangelogProvider`] in turn and keep the
//! first one that yields at least one release. When every provider
//! fails a single-entry changelog for the running version is generated
//! locally. Development builds use the bundled history.

use anyhow::{bail, Result};
use std::sync::Arc;
use std::time::Duration;

use super::source::USER_AGENT;
use crate::changelog::{
    bundled_history, ChangeNote, ChangeType, ChangelogParser, ReleaseEntry, VersionHistory,
};
use crate::config::{AppConfig, Channel};

/// Note used in the generated fallback changelog.
pub const FALLBACK_IMPROVEMENT: &str = "Improved stability and performance";

/// Note used in the generated fallback changelog.
pub const FALLBACK_FIX: &str = "Fixed known issues";

/// A source of changelog markdown.
pub trait ChangelogProvider {
    fn name(&self) -> &str;

    fn fetch(&self) -> Result<String>;
}

/// Changelog markdown served over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteChangelog {
    url: String,
    timeout: Duration,
}

impl RemoteChangelog {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ChangelogProvider for RemoteChangelog {
    fn name(&self) -> &str {
        "remote"
    }

    fn fetch(&self) -> Result<String> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()?;

        let response = client.get(&self.url).send()?;
        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), self.url);
        }

        Ok(response.text()?)
    }
}

/// Resolves the changelog shown to the user.
pub struct ChangelogFetcher {
    channel: Channel,
    providers: Vec<Box<dyn ChangelogProvider>>,
    bundled: VersionHistory,
    current_version: String,
    parser: ChangelogParser,
}

impl ChangelogFetcher {
    pub fn new(channel: Channel, current_version: impl Into<String>) -> Self {
        Self {
            channel,
            providers: Vec::new(),
            bundled: bundled_history(),
            current_version: current_version.into(),
            parser: ChangelogParser::new(),
        }
    }

    /// Fetcher wired to the configured repository.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.channel, config.current_version.clone()).with_provider(Box::new(
            RemoteChangelog::new(config.urls().changelog(), config.request_timeout()),
        ))
    }

    pub fn with_provider(mut self, provider: Box<dyn ChangelogProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn with_bundled(mut self, bundled: VersionHistory) -> Self {
        self.bundled = bundled;
        self
    }

    /// Parser used for remote text; its `today` dates the fallback entry.
    pub fn with_parser(mut self, parser: ChangelogParser) -> Self {
        self.parser = parser;
        self
    }

    /// Resolve the changelog. Never fails.
    pub fn fetch(&self) -> VersionHistory {
        if self.channel == Channel::Development {
            tracing::debug!("Development channel, using bundled changelog");
            return self.bundled.clone();
        }

        for provider in &self.providers {
            match provider.fetch() {
                Ok(text) if text.trim().is_empty() => {
                    tracing::warn!("Changelog from {} is empty", provider.name());
                }
                Ok(text) => {
                    let history = self.parser.parse(&text);
                    if !history.is_empty() {
                        tracing::info!(
                            "Loaded {} releases from {} changelog",
                            history.len(),
                            provider.name()
                        );
                        return history;
                    }
                    tracing::warn!("Changelog from {} has no releases", provider.name());
                }
                Err(e) => {
                    tracing::warn!("Could not fetch changelog from {}: {:#}", provider.name(), e);
                }
            }
        }

        tracing::info!("All changelog sources failed, generating a local changelog");
        self.generated()
    }

    fn generated(&self) -> VersionHistory {
        let changes = vec![
            ChangeNote::new(ChangeType::Improvement, FALLBACK_IMPROVEMENT),
            ChangeNote::new(ChangeType::Fix, FALLBACK_FIX),
        ];

        match ReleaseEntry::new(self.current_version.clone(), self.parser.today(), changes) {
            Ok(entry) => VersionHistory::new().prepend(entry),
            Err(e) => {
                tracing::warn!("Cannot generate changelog entry: {}", e);
                self.bundled.clone()
            }
        }
    }
}

/// The changelog currently shown, as an immutable snapshot.
///
/// Readers hold an `Arc` of the history they loaded; replacing the
/// changelog produces a new state and never touches existing snapshots.
#[derive(Debug, Clone, Default)]
pub struct ChangelogState {
    history: Arc<VersionHistory>,
}

impl ChangelogState {
    pub fn new(history: VersionHistory) -> Self {
        Self {
            history: Arc::new(history),
        }
    }

    /// State holding the bundled history.
    pub fn bundled() -> Self {
        Self::new(bundled_history())
    }

    pub fn current(&self) -> Arc<VersionHistory> {
        Arc::clone(&self.history)
    }

    /// New state holding `history`.
    pub fn replace(&self, history: VersionHistory) -> Self {
        Self::new(history)
    }

    /// New state holding whatever `fetcher` resolves.
    pub fn refreshed(&self, fetcher: &ChangelogFetcher) -> Self {
        self.replace(fetcher.fetch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::CURRENT_VERSION;
    use httpmock::prelude::*;

    struct StaticProvider(Result<String, String>);

    impl ChangelogProvider for StaticProvider {
        fn name(&self) -> &str {
            "static"
        }

        fn fetch(&self) -> Result<String> {
            self.0.clone().map_err(|e| anyhow::anyhow!(e))
        }
    }

    fn ok(text: &str) -> Box<dyn ChangelogProvider> {
        Box::new(StaticProvider(Ok(text.to_string())))
    }

    fn err() -> Box<dyn ChangelogProvider> {
        Box::new(StaticProvider(Err("offline".to_string())))
    }

    fn production() -> ChangelogFetcher {
        ChangelogFetcher::new(Channel::Production, "v1.0.1")
            .with_parser(ChangelogParser::with_today("2030-01-01"))
    }

    #[test]
    fn development_uses_bundled() {
        let fetcher = ChangelogFetcher::new(Channel::Development, CURRENT_VERSION)
            .with_provider(ok("## v9.9.9 (2030-01-01)\n"));
        assert_eq!(fetcher.fetch(), bundled_history());
    }

    #[test]
    fn first_successful_provider_wins() {
        let fetcher = production()
            .with_provider(err())
            .with_provider(ok("## v1.0.2 (2025-05-01)\n- [fix] a\n"))
            .with_provider(ok("## v7.0.0 (2025-05-01)\n"));

        let history = fetcher.fetch();
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().version(), "v1.0.2");
    }

    #[test]
    fn empty_or_headingless_text_is_skipped() {
        let fetcher = production()
            .with_provider(ok("   \n"))
            .with_provider(ok("no releases here"))
            .with_provider(ok("## v1.0.0 (2025-04-12)\n"));

        assert_eq!(fetcher.fetch().latest().unwrap().version(), "v1.0.0");
    }

    #[test]
    fn total_failure_generates_single_entry() {
        let history = production().with_provider(err()).fetch();

        assert_eq!(history.len(), 1);
        let entry = history.latest().unwrap();
        assert_eq!(entry.version(), "v1.0.1");
        assert_eq!(entry.date(), "2030-01-01");
        assert_eq!(entry.changes().len(), 2);
        assert_eq!(entry.changes()[0].change_type(), ChangeType::Improvement);
        assert_eq!(entry.changes()[1].text(), FALLBACK_FIX);
    }

    #[test]
    fn no_providers_generates_single_entry() {
        assert_eq!(production().fetch().len(), 1);
    }

    #[test]
    fn invalid_current_version_falls_back_to_bundled() {
        let fetcher = ChangelogFetcher::new(Channel::Production, "dev-build")
            .with_bundled(VersionHistory::new());
        assert!(fetcher.fetch().is_empty());
    }

    #[test]
    fn remote_changelog_over_http() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/main/CHANGELOG.md");
            then.status(200)
                .body("# Changelog\n\n## v1.0.1 (2025-04-12)\n\n### ✨ New Features\n\n- Tags\n");
        });

        let fetcher = production().with_provider(Box::new(RemoteChangelog::new(
            server.url("/main/CHANGELOG.md"),
            Duration::from_secs(5),
        )));
        let history = fetcher.fetch();

        let entry = history.latest().unwrap();
        assert_eq!(entry.version(), "v1.0.1");
        assert_eq!(entry.changes()[0].change_type(), ChangeType::Feature);
        assert_eq!(entry.changes()[0].text(), "Tags");
    }

    #[test]
    fn remote_changelog_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/CHANGELOG.md");
            then.status(500);
        });

        let provider = RemoteChangelog::new(server.url("/CHANGELOG.md"), Duration::from_secs(5));
        let err = provider.fetch().unwrap_err().to_string();
        assert!(err.contains("500"), "Error should mention 500: {}", err);
    }

    #[test]
    fn state_replace_keeps_old_snapshot() {
        let state = ChangelogState::bundled();
        let snapshot = state.current();

        let next = state.replace(VersionHistory::new());

        assert_eq!(*snapshot, bundled_history());
        assert!(next.current().is_empty());
        assert_eq!(*state.current(), bundled_history());
    }

    #[test]
    fn state_refreshed_from_fetcher() {
        let fetcher = production().with_provider(ok("## v2.0.0 (2026-01-01)\n"));
        let state = ChangelogState::default().refreshed(&fetcher);
        assert_eq!(state.current().latest().unwrap().version(), "v2.0.0");
    }
}
