//! In-process storage slot.

use std::sync::Arc;

use spin::Mutex;

use super::LikesStore;
use crate::error::Result;

/// Storage slot kept in memory.
///
/// Clones share the same slot, so a clone handed to one controller and read
/// back by another behaves like a page reload against the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds `snapshot`.
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(snapshot.into()))),
        }
    }

    /// Current contents of the slot.
    pub fn snapshot(&self) -> Option<String> {
        self.slot.lock().clone()
    }
}

impl LikesStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.snapshot())
    }

    fn write(&mut self, snapshot: &str) -> Result<()> {
        *self.slot.lock() = Some(snapshot.to_string());
        Ok(())
    }
}
