//! Version ordering and release numbering.
//!
//! This module provides:
//! - The canonical version comparator used everywhere in the crate
//! - Prefix handling for `v`-tagged versions
//! - Structured [`Version`] values and [`BumpKind`] increments

pub mod bump;
pub mod compare;

pub use bump::{highest_version, BumpKind, Version};
pub use compare::{
    compare, compare_versions, ensure_prefix, format_version, is_newer_version,
    is_release_version, strip_prefix,
};
