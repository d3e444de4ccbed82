//! Durable storage for the likes collection.
//!
//! Storage is a single named slot holding the serialized collection. It is
//! read once at startup and overwritten wholesale after every change, so the
//! trait is deliberately small.
//!
//! # Implementations
//!
//! - [`JsonFileStore`]: JSON file with atomic writes (default)
//! - [`MemoryStore`]: shared in-process slot

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Slot holding the serialized likes collection.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait LikesStore: Send {
    /// Read the stored snapshot, `None` when nothing was ever written.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn write(&mut self, snapshot: &str) -> Result<()>;
}
