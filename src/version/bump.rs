//! Structured release versions and increments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::compare::{compare_versions, strip_prefix};
use crate::error::{FontviewError, Result};

/// Which component of a version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpKind {
    /// `1.0.0` -> `2.0.0`
    Major,
    /// `1.0.0` -> `1.1.0`
    Minor,
    /// `1.0.0` -> `1.0.1`
    #[default]
    Patch,
}

impl BumpKind {
    /// Lowercase name of the bump kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl FromStr for BumpKind {
    type Err = FontviewError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            _ => Err(FontviewError::UnknownBumpKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `MAJOR.MINOR.PATCH` release version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a version from its components.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `v?MAJOR.MINOR.PATCH`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || FontviewError::InvalidVersion {
            version: input.to_string(),
        };

        let parts: Vec<&str> = strip_prefix(input).split('.').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let mut numbers = [0u64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse().map_err(|_| invalid())?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }

    /// The next version for the given bump kind.
    ///
    /// Fails when the bumped component is already `u64::MAX`.
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let overflow = || FontviewError::VersionOverflow {
            version: self.to_string(),
        };

        let next = match kind {
            BumpKind::Major => Self::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
            BumpKind::Minor => Self::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            BumpKind::Patch => Self::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(next)
    }

    /// The git tag form, `v1.2.3`.
    pub fn tag(&self) -> String {
        format!("v{}", self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = FontviewError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Pick the highest release version among `candidates`.
///
/// Candidates that are not release versions are skipped. Returns `None`
/// when nothing parses.
pub fn highest_version<'a, I>(candidates: I) -> Option<Version>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&str, Version)> = None;

    for candidate in candidates {
        let Ok(version) = Version::parse(candidate) else {
            tracing::debug!("Skipping unparseable version candidate: {}", candidate);
            continue;
        };

        best = match best {
            Some((current, _)) if compare_versions(candidate, current).is_gt() => {
                Some((candidate, version))
            }
            Some(existing) => Some(existing),
            None => Some((candidate, version)),
        };
    }

    best.map(|(_, version)| version)
}
