//! Change detection for externally written state.

use crate::error::Result;

use super::StateStore;

/// Revision cursor over one store key.
///
/// A watcher remembers the last revision its owner has seen. When the store
/// revision moves, whether from another handle in this process or another
/// process entirely, the owner is expected to reload the value wholesale rather
/// than merge anything.
#[derive(Debug, Clone)]
pub struct StoreWatcher {
    key: String,
    last_seen: Option<u64>,
}

impl StoreWatcher {
    /// Creates a watcher positioned at the key's current revision.
    pub fn new(store: &StateStore, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let last_seen = store.revision(&key)?;
        Ok(Self { key, last_seen })
    }

    /// Creates a watcher from an already-known revision, without a store
    /// handle.
    pub fn detached(key: impl Into<String>, last_seen: Option<u64>) -> Self {
        Self {
            key: key.into(),
            last_seen,
        }
    }

    /// The store key this watcher observes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Re-positions the cursor after a write made by the owner itself, so
    /// the owner's own writes never read as external changes.
    pub fn mark_seen(&mut self, revision: Option<u64>) {
        self.last_seen = revision;
    }

    /// Advances the cursor to `revision`, reporting whether it moved.
    pub fn update(&mut self, revision: Option<u64>) -> bool {
        if self.last_seen == revision {
            return false;
        }
        self.last_seen = revision;
        true
    }

    /// Checks the store for a foreign change, advancing the cursor.
    pub fn poll(&mut self, store: &StateStore) -> Result<bool> {
        let revision = store.revision(&self.key)?;
        Ok(self.update(revision))
    }
}
