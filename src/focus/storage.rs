//! Durable persistence of the selected focus.
//!
//! [`FocusStorage`] wraps an optional [`KeyValueStore`]. Persistence is a
//! convenience: a missing store turns every operation into a no-op, and store
//! failures are logged and swallowed.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::key::FocusKey;
use crate::branding::FOCUS_STORAGE_KEY;

/// Minimal string key-value store backing [`FocusStorage`].
pub trait KeyValueStore {
    /// Reads a value; `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Writes a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    /// Removes a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Persists a single [`FocusKey`] under [`FOCUS_STORAGE_KEY`].
#[derive(Debug, Clone)]
pub struct FocusStorage<S> {
    store: Option<S>,
}

impl<S> Default for FocusStorage<S> {
    fn default() -> Self {
        Self { store: None }
    }
}

impl<S: KeyValueStore> FocusStorage<S> {
    /// Storage backed by a durable store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store: Some(store) }
    }

    /// Storage with no durable store; every operation is a no-op.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Whether a durable store is attached.
    #[must_use]
    pub const fn is_detached(&self) -> bool {
        self.store.is_none()
    }

    /// The backing store, if attached.
    #[must_use]
    pub const fn store(&self) -> Option<&S> {
        self.store.as_ref()
    }

    /// Consumes the storage and returns the backing store.
    #[must_use]
    pub fn into_store(self) -> Option<S> {
        self.store
    }

    /// Reads the persisted focus.
    ///
    /// Values that are not a valid focus identifier read back as `None`.
    #[must_use]
    pub fn load(&self) -> Option<FocusKey> {
        let store = self.store.as_ref()?;

        match store.get(FOCUS_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse::<FocusKey>() {
                Ok(key) => Some(key),
                Err(err) => {
                    debug!(%err, "ignoring invalid persisted focus");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "failed to read persisted focus");
                None
            }
        }
    }

    /// Persists the focus, ignoring store failures.
    pub fn save(&mut self, key: FocusKey) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        if let Err(err) = store.set(FOCUS_STORAGE_KEY, key.as_str()) {
            warn!(error = %err, focus = %key, "failed to persist focus");
        }
    }

    /// Removes the persisted focus, ignoring store failures.
    pub fn clear(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        if let Err(err) = store.remove(FOCUS_STORAGE_KEY) {
            warn!(error = %err, "failed to clear persisted focus");
        }
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// Volatile store for tests and embedding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seeding, e.g. with a stale value from an older release.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Raw value stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ============================================================================
// File store
// ============================================================================

/// Store backed by a JSON object file.
///
/// Writes go through a temp file and rename so a crash never leaves a
/// half-written file behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).context(format!(
            "Failed to read storage file: {}",
            self.path.display()
        ))?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).context(format!(
            "Failed to parse storage file: {}",
            self.path.display()
        ))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create storage directory: {}",
                parent.display()
            ))?;
        }

        let content =
            serde_json::to_string_pretty(entries).context("Failed to serialize storage")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp storage file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp storage file to: {}",
            self.path.display()
        ))?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every future write
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut entries = self.read_entries().unwrap_or_default();
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
