//! fontview - Release metadata, changelog and update checks for the font
//! viewer app.
//!
//! The crate owns everything the app knows about its own versions: how
//! versions compare, how the version history is rendered to and parsed
//! from markdown, and how an update check decides whether to notify.
//!
//! # Modules
//!
//! - [`changelog`] - Version history model, markdown rendering and parsing
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Layered YAML configuration
//! - [`error`] - Error types and result aliases
//! - [`release`] - Planning and recording new releases
//! - [`store`] - Persistent key-value storage
//! - [`ui`] - Terminal output
//! - [`updates`] - Update sources, update checks and changelog fetching
//! - [`version`] - Version comparison and bumping
//!
//! # Example
//!
//! ```
//! use fontview::version::{compare, is_newer_version};
//!
//! assert_eq!(compare("v1.10.0", "1.9.0"), 1);
//! assert!(is_newer_version("v1.0.1", "v1.0.0"));
//! ```

pub mod changelog;
pub mod cli;
pub mod config;
pub mod error;
pub mod release;
pub mod store;
pub mod ui;
pub mod updates;
pub mod version;

pub use error::{FontviewError, Result};
