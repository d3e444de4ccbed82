//! Shopping list of independently editable items.

use std::fmt;

use uuid::Uuid;

/// Identifier of a shopping list item, unique for the list's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub id: ItemId,
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

/// Ordered shopping list.
///
/// Adding never merges: every call creates a distinct item even when unit
/// and ingredient match an existing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    items: Vec<ListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&ListItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Append a new item and return it for immediate rendering.
    pub fn add_item(&mut self, count: Option<f64>, unit: impl Into<String>, ingredient: impl Into<String>) -> ListItem {
        let mut id = ItemId::generate();
        while self.get(&id).is_some() {
            id = ItemId::generate();
        }

        let item = ListItem {
            id,
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        self.items.push(item.clone());
        item
    }

    /// Remove an item, returning it. Unknown ids leave the list untouched.
    pub fn delete_item(&mut self, id: &ItemId) -> Option<ListItem> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Set an item's count. The value is stored as given, NaN included.
    ///
    /// Returns whether an item with `id` exists.
    pub fn update_count(&mut self, id: &ItemId, count: f64) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.count = Some(count);
                true
            }
            None => false,
        }
    }
}
