//! Events processed by the recipe controller.

use std::fmt;

use crate::error::SourceError;
use crate::models::{ItemId, RawRecipe, RecipeSummary, ServingsChange};

/// Generation token attached to every fetch and echoed by its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub(crate) u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything that can change the application state.
///
/// User-facing events are produced by the [`dispatch`](super::dispatch)
/// table; the `*Completed`/`*Fetched` variants are emitted by fetch effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A search form submission.
    SearchSubmitted(String),

    /// A search fetch resolved.
    SearchCompleted {
        request: RequestId,
        query: String,
        outcome: Result<Vec<RecipeSummary>, SourceError>,
    },

    /// A pagination button was clicked.
    PageRequested(usize),

    /// The location identifier changed to a recipe id.
    LocationChanged(String),

    /// A recipe fetch resolved.
    RecipeFetched {
        request: RequestId,
        id: String,
        outcome: Result<RawRecipe, SourceError>,
    },

    ServingsChanged(ServingsChange),

    /// Add every ingredient of the loaded recipe to the shopping list.
    AddIngredientsToList,

    ListItemDeleted(ItemId),

    ListItemCountChanged { id: ItemId, count: f64 },

    /// Like or unlike the loaded recipe.
    LikeToggled,
}
