//! Domain state for the four feature areas.
//!
//! Each type here is plain data plus the operations that mutate it. None of
//! them knows about another; the [`app`](crate::app) controller is the only
//! place where they meet.

pub mod likes;
pub mod list;
pub mod recipe;
pub mod search;

pub use likes::{Like, Likes};
pub use list::{ItemId, ListItem, ShoppingList};
pub use recipe::{Ingredient, RawRecipe, Recipe, ServingsChange};
pub use search::{PageButton, RecipeSummary, SearchSession};
