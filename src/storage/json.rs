//! JSON file storage slot.
//!
//! Writes go to a temporary sibling file that is then renamed over the
//! target, so a crash mid-write never leaves a truncated snapshot behind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::LikesStore;
use crate::error::Result;

/// File-backed storage slot.
///
/// ```no_run
/// use forkify_core::storage::{JsonFileStore, LikesStore};
///
/// let mut store = JsonFileStore::new("/tmp/forkify/likes.json");
/// store.write("[]")?;
/// assert_eq!(store.read()?.as_deref(), Some("[]"));
/// # Ok::<(), forkify_core::error::StorageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl LikesStore for JsonFileStore {
    fn read(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(contents) => {
                tracing::debug!(path = ?self.file_path, bytes = contents.len(), "read likes snapshot");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, snapshot: &str) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.file_path.with_extension("tmp");
        tracing::trace!(tmp_path = ?tmp_path, "writing likes to temporary file");
        std::fs::write(&tmp_path, snapshot)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "likes snapshot saved");
        Ok(())
    }
}
