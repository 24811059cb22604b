//! Error types for fontview operations.
//!
//! This module defines [`FontviewError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FontviewError` for domain errors the CLI reports to the user
//! - Use `anyhow::Error` (via `FontviewError::Other`) inside remote collaborators
//! - Update checks and changelog fetches absorb their errors and never
//!   surface them to the caller

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fontview operations.
#[derive(Debug, Error)]
pub enum FontviewError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A version string does not match `v?MAJOR.MINOR.PATCH`.
    #[error("Invalid version '{version}': expected MAJOR.MINOR.PATCH")]
    InvalidVersion { version: String },

    /// A release date is not an ISO 8601 calendar date.
    #[error("Invalid date '{date}': expected YYYY-MM-DD")]
    InvalidDate { date: String },

    /// Bumping a version component would overflow.
    #[error("Cannot bump '{version}': component out of range")]
    VersionOverflow { version: String },

    /// Bump kind is not one of major, minor or patch.
    #[error("Unknown bump kind '{kind}' (expected major, minor or patch)")]
    UnknownBumpKind { kind: String },

    /// A version history file could not be read or written.
    #[error("Failed to load history at {path}: {message}")]
    HistoryError { path: PathBuf, message: String },

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for fontview operations.
pub type Result<T> = std::result::Result<T, FontviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = FontviewError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = FontviewError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn invalid_version_displays_input() {
        let err = FontviewError::InvalidVersion {
            version: "1.x".into(),
        };
        assert!(err.to_string().contains("1.x"));
    }

    #[test]
    fn invalid_date_displays_input() {
        let err = FontviewError::InvalidDate {
            date: "April 12".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("April 12"));
        assert!(msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn version_overflow_displays_version() {
        let err = FontviewError::VersionOverflow {
            version: "18446744073709551615.0.0".into(),
        };
        assert!(err.to_string().contains("18446744073709551615.0.0"));
    }

    #[test]
    fn unknown_bump_kind_lists_choices() {
        let err = FontviewError::UnknownBumpKind {
            kind: "huge".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("huge"));
        assert!(msg.contains("major, minor or patch"));
    }

    #[test]
    fn history_error_displays_path_and_message() {
        let err = FontviewError::HistoryError {
            path: PathBuf::from("history.json"),
            message: "expected array".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("history.json"));
        assert!(msg.contains("expected array"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FontviewError = io_err.into();
        assert!(matches!(err, FontviewError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_to_other() {
        let err: FontviewError = anyhow::anyhow!("remote unavailable").into();
        assert!(matches!(err, FontviewError::Other(_)));
        assert_eq!(err.to_string(), "remote unavailable");
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(FontviewError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
