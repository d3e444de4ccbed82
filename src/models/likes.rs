//! Liked recipes, persisted as a whole after every change.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StorageError};
use crate::storage::LikesStore;

/// A bookmarked recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

/// Liked recipes keyed by id, in the order they were liked.
///
/// An id is either present or absent; the total is always the number of
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Likes {
    likes: Vec<Like>,
}

impl Likes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the collection from its storage slot.
    ///
    /// A missing, unreadable or malformed snapshot yields an empty
    /// collection. Duplicate ids in the snapshot keep their first entry.
    pub fn restore(store: &dyn LikesStore) -> Self {
        let snapshot = match store.read() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                tracing::debug!("no persisted likes, starting empty");
                return Self::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted likes, starting empty");
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<Like>>(&snapshot) {
            Ok(entries) => {
                let mut likes = Self::new();
                for like in entries {
                    likes.insert(like);
                }
                tracing::debug!(total = likes.total(), "restored likes");
                likes
            }
            Err(e) => {
                tracing::warn!(error = %e, "persisted likes are malformed, starting empty");
                Self::new()
            }
        }
    }

    /// Write the entire collection to the storage slot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying write fails.
    pub fn persist(&self, store: &mut dyn LikesStore) -> Result<()> {
        let snapshot = serde_json::to_string(&self.likes)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        store.write(&snapshot)
    }

    /// Like a recipe. Liking an already liked id returns the existing entry.
    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        img: impl Into<String>,
    ) -> Like {
        self.insert(Like {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            img: img.into(),
        })
    }

    fn insert(&mut self, like: Like) -> Like {
        if let Some(existing) = self.get(&like.id) {
            return existing.clone();
        }
        self.likes.push(like.clone());
        like
    }

    /// Remove a like, returning it when it was present.
    pub fn delete_like(&mut self, id: &str) -> Option<Like> {
        let index = self.likes.iter().position(|like| like.id == id)?;
        Some(self.likes.remove(index))
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Like> {
        self.likes.iter().find(|like| like.id == id)
    }

    pub fn total(&self) -> usize {
        self.likes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Like> {
        self.likes.iter()
    }
}
