//! In-memory layout store.
//!
//! Clones share one backend, so a clone stands in for a later session on
//! the same storage. Layouts are kept in their encoded form, which lets
//! tests plant corrupt data and makes a save/load pass through the same
//! codec as the file store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::layout::Layout;
use crate::store::{codec, LayoutStore, StoreError};

#[derive(Debug, Default)]
struct Backend {
    entries: Mutex<HashMap<String, String>>,
    fail_saves: AtomicBool,
    fail_loads: AtomicBool,
}

/// Shared in-memory store bound to one owner.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    backend: Arc<Backend>,
    owner: String,
}

impl MemoryStore {
    /// Creates an empty store for `owner`.
    pub fn new(owner: &str) -> Self {
        Self {
            backend: Arc::default(),
            owner: owner.to_string(),
        }
    }

    /// A handle on the same backend bound to another owner.
    pub fn for_owner(&self, owner: &str) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            owner: owner.to_string(),
        }
    }

    /// Makes every following save fail (simulates an unavailable or full
    /// storage).
    pub fn fail_saves(&self, fail: bool) {
        self.backend.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Makes every following load fail.
    pub fn fail_loads(&self, fail: bool) {
        self.backend.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Raw stored value for this owner.
    pub fn raw(&self) -> Option<String> {
        self.entries().get(&self.owner).cloned()
    }

    /// Replaces the raw stored value for this owner.
    pub fn set_raw(&self, content: impl Into<String>) {
        self.entries().insert(self.owner.clone(), content.into());
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.backend
            .entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }
}

impl LayoutStore for MemoryStore {
    fn load(&self) -> Result<Option<Layout>, StoreError> {
        if self.backend.fail_loads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("load disabled".to_string()));
        }
        self.raw().map(|content| codec::decode(&content)).transpose()
    }

    fn save(&self, layout: &Layout) -> Result<(), StoreError> {
        if self.backend.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("quota exceeded".to_string()));
        }
        let content = codec::encode(&self.owner, layout)?;
        self.set_raw(content);
        Ok(())
    }
}
