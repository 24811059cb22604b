//! Configuration loading for fontview.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use fontview::config::{load_from_paths, Channel, ConfigPaths};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".fontview");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "channel: development").unwrap();
//!
//! let config = load_from_paths(&ConfigPaths::discover_project(temp.path())).unwrap();
//! assert_eq!(config.channel, Channel::Development);
//! ```
//!
//! # Configuration File Locations
//!
//! fontview merges configuration in this order:
//! 1. User global config (`~/.fontview/config.yml`)
//! 2. Project config (`.fontview/config.yml`)
//! 3. Local overrides (`.fontview/config.local.yml`)
//!
//! `FONTVIEW_CHANNEL` overrides the merged `channel`.

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    apply_env_overrides, load_config, load_config_value, load_from_paths, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{AppConfig, Channel, GithubConfig, GithubUrls};
