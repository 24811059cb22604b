//! Local key-value persistence.
//!
//! A flat JSON object on disk holding the app's small pieces of state
//! (favorites, layout, last-run version). Reads fall back to defaults
//! and writes never fail the caller.

pub mod keys;
pub mod kv;

pub use keys::StorageKey;
pub use kv::KeyValueStore;
