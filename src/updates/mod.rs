//! Update checking and changelog retrieval.
//!
//! This module provides:
//! - [`UpdateSource`] implementations for development and production
//! - [`UpdateChecker`], which never fails and falls back to the bundled version
//! - [`ChangelogFetcher`] and [`ChangelogState`] for the published changelog
//! - [`WhatsNew`] for the post-upgrade notice

pub mod changelog;
pub mod check;
pub mod notice;
pub mod source;

pub use changelog::{ChangelogFetcher, ChangelogProvider, ChangelogState, RemoteChangelog};
pub use check::{UpdateChecker, UpdateInfo};
pub use notice::{show_update_notification, WhatsNew};
pub use source::{source_for, Manifest, ManifestSource, SimulatedSource, UpdateSource};
