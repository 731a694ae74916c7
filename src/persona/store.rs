//! Key-value storage for session state.
//!
//! The session only ever reads and writes a single key, but the store is a
//! plain string map so the file format stays forward compatible.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Persistent string key-value storage.
pub trait SessionStore {
    /// Read a value. Missing or unreadable data is `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────
// Memory Store
// ─────────────────────────────────────────────────────────────────

/// In-process store, one fresh instance per test.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────
// File Store
// ─────────────────────────────────────────────────────────────────

/// JSON object on disk, e.g. `{"currentPersona": "client"}`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole map. Absent or corrupt files read as empty.
    fn read_entries(&self) -> BTreeMap<String, String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No session state file");
                return BTreeMap::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable session state, ignoring");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt session state, ignoring");
                BTreeMap::new()
            }
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::IoWrite {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, content).map_err(|e| Error::IoWrite {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), key, "Session state written");
        Ok(())
    }
}
