//! JSON-file backed key-value store.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Key-value store persisted as a single JSON object.
///
/// Every operation reads the file afresh so separate handles on the
/// same path observe each other's writes. Failures are logged and
/// replaced with defaults.
#[derive(Debug, Clone)]
pub struct KeyValueStore {
    path: PathBuf,
}

impl KeyValueStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<data dir>/fontview/storage.json`.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fontview")
            .join("storage.json")
    }

    /// Store at the default location.
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a value, or `None` when missing or unreadable.
    pub fn get<T: DeserializeOwned>(&self, key: impl AsRef<str>) -> Option<T> {
        let key = key.as_ref();
        let value = self.read().remove(key)?;

        match serde_json::from_value(value) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("Failed to read stored value for {}: {}", key, e);
                None
            }
        }
    }

    /// Get a value or the given default.
    pub fn get_or<T: DeserializeOwned>(&self, key: impl AsRef<str>, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Store a value. Failures are logged, not returned.
    pub fn set<T: Serialize + ?Sized>(&self, key: impl AsRef<str>, value: &T) {
        let key = key.as_ref();
        let value = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Failed to serialize value for {}: {}", key, e);
                return;
            }
        };

        let mut map = self.read();
        map.insert(key.to_string(), value);
        self.write_logged(&map, key);
    }

    /// Remove a value. Failures are logged, not returned.
    pub fn remove(&self, key: impl AsRef<str>) {
        let key = key.as_ref();
        let mut map = self.read();
        if map.remove(key).is_some() {
            self.write_logged(&map, key);
        }
    }

    /// Remove every value.
    pub fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                tracing::warn!("Failed to clear store {}: {}", self.path.display(), e);
            }
        }
    }

    /// Stored keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn read(&self) -> Map<String, Value> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Map::new(),
            Err(e) => {
                tracing::warn!("Failed to read store {}: {}", self.path.display(), e);
                return Map::new();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::warn!(
                    "Store {} is not a JSON object, ignoring contents",
                    self.path.display()
                );
                Map::new()
            }
        }
    }

    fn write_logged(&self, map: &Map<String, Value>, key: &str) {
        if let Err(e) = self.write(map) {
            tracing::warn!("Failed to save {} to {}: {}", key, self.path.display(), e);
        }
    }

    fn write(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(map)?;

        // Atomic write: temp file, then rename
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
