//! Recording a new release.
//!
//! Planning picks the highest version among the app's manifests and
//! bumps it. Recording produces a new history with the release in
//! front and a matching `UPDATE_LOG.md` section. Committing, tagging and
//! pushing are left to the caller.

use crate::changelog::{ReleaseEntry, UpdateLog, VersionHistory};
use crate::error::{FontviewError, Result};
use crate::version::{highest_version, BumpKind, Version};

/// The version a release will be cut as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleasePlan {
    pub base: Version,
    pub kind: BumpKind,
    pub next: Version,
}

impl ReleasePlan {
    /// Plan a release from every version the project currently declares.
    ///
    /// The highest declared version is the base; unparseable entries are
    /// ignored.
    pub fn new<'a, I>(current_versions: I, kind: BumpKind) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let candidates: Vec<&str> = current_versions.into_iter().collect();
        let base = highest_version(candidates.iter().copied()).ok_or_else(|| {
            FontviewError::InvalidVersion {
                version: candidates.join(", "),
            }
        })?;

        Self::from_base(base, kind)
    }

    pub fn from_base(base: Version, kind: BumpKind) -> Result<Self> {
        Ok(Self {
            base,
            kind,
            next: base.bump(kind)?,
        })
    }

    /// The release tag, `v{next}`.
    pub fn tag(&self) -> String {
        self.next.tag()
    }
}

/// Result of recording a release.
#[derive(Debug, Clone)]
pub struct RecordedRelease {
    pub history: VersionHistory,
    /// `None` when the update log already had a section for the tag.
    pub update_log: Option<UpdateLog>,
}

/// Record `plan` in `history` and `update_log`.
///
/// Neither input is modified.
pub fn record_release(
    history: &VersionHistory,
    update_log: &UpdateLog,
    plan: &ReleasePlan,
    date: &str,
) -> Result<RecordedRelease> {
    let tag = plan.tag();
    let entry = ReleaseEntry::release(tag.as_str(), date)?;
    tracing::info!("Recording release {} ({} bump from {})", tag, plan.kind, plan.base);

    let update_log = update_log.with_release(&tag);
    if update_log.is_none() {
        tracing::warn!("Update log already has a section for {}", tag);
    }

    Ok(RecordedRelease {
        history: history.prepend(entry),
        update_log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::DEFAULT_RELEASE_NOTE;

    #[test]
    fn plan_uses_highest_declared_version() {
        let plan = ReleasePlan::new(["1.0.0", "1.0.1", "unknown"], BumpKind::Patch).unwrap();
        assert_eq!(plan.base, Version::new(1, 0, 1));
        assert_eq!(plan.next, Version::new(1, 0, 2));
        assert_eq!(plan.tag(), "v1.0.2");
    }

    #[test]
    fn plan_minor_and_major() {
        let minor = ReleasePlan::new(["v1.4.2"], BumpKind::Minor).unwrap();
        assert_eq!(minor.tag(), "v1.5.0");

        let major = ReleasePlan::new(["v1.4.2"], BumpKind::Major).unwrap();
        assert_eq!(major.tag(), "v2.0.0");
    }

    #[test]
    fn plan_without_versions_fails() {
        let result = ReleasePlan::new(["unknown"], BumpKind::Patch);
        assert!(matches!(result, Err(FontviewError::InvalidVersion { .. })));
    }

    #[test]
    fn plan_at_component_limit_fails() {
        let result = ReleasePlan::new(["18446744073709551615.0.0"], BumpKind::Major);
        assert!(matches!(result, Err(FontviewError::VersionOverflow { .. })));
    }

    #[test]
    fn record_rejects_invalid_date() {
        let plan = ReleasePlan::new(["v1.0.1"], BumpKind::Patch).unwrap();
        let result = record_release(&VersionHistory::new(), &UpdateLog::default(), &plan, "May 1");
        assert!(matches!(result, Err(FontviewError::InvalidDate { .. })));
    }

    #[test]
    fn record_prepends_entry_and_log_section() {
        let history =
            VersionHistory::new().prepend(ReleaseEntry::release("v1.0.1", "2025-04-12").unwrap());
        let log = UpdateLog::default();
        let plan = ReleasePlan::new(["v1.0.1"], BumpKind::Patch).unwrap();

        let recorded = record_release(&history, &log, &plan, "2025-05-01").unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(recorded.history.len(), 2);
        let latest = recorded.history.latest().unwrap();
        assert_eq!(latest.version(), "v1.0.2");
        assert_eq!(latest.date(), "2025-05-01");
        assert_eq!(latest.changes()[0].text(), DEFAULT_RELEASE_NOTE);

        let log = recorded.update_log.unwrap();
        assert!(log.section("v1.0.2").is_some());
    }

    #[test]
    fn record_keeps_existing_log_section() {
        let log = UpdateLog::parse("# Update Log\n\n## v1.0.2\n- Hand-written notes\n");
        let plan = ReleasePlan::new(["1.0.1"], BumpKind::Patch).unwrap();

        let recorded = record_release(&VersionHistory::new(), &log, &plan, "2025-05-01").unwrap();

        assert!(recorded.update_log.is_none());
        assert_eq!(recorded.history.len(), 1);
    }
}
