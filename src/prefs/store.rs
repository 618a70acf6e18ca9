//! Preference storage
//!
//! One opaque string value under a fixed namespaced key, the portal's
//! equivalent of a browser local-storage entry. Every operation is
//! best-effort: a missing or unreadable backing file degrades to "no data"
//! and a failed write degrades to "no persistence", with only a tracing
//! diagnostic to show for it.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::warn;

/// The storage key for the preference record blob.
pub const STORE_KEY: &str = "middleware-portal-theme";

/// A string-keyed persistent store.
pub trait PrefStore {
    /// Read the value under `key`, if present and readable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Side effect only; failures are swallowed.
    fn set(&mut self, key: &str, value: &str);
}

/// File-backed store: a flat JSON object of string keys and values in the
/// user's config directory.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_map(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // Missing file is the normal first-run case; stay quiet.
            Err(_) => return BTreeMap::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                warn!("discarding unparsable settings file {}: {err}", self.path.display());
                BTreeMap::new()
            }
        }
    }
}

impl PrefStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!("cannot create settings directory {}: {err}", parent.display());
                return;
            }
        }
        let raw = match serde_json::to_string_pretty(&map) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("cannot serialize settings map: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, raw) {
            warn!("cannot write settings file {}: {err}", self.path.display());
        }
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl PrefStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
