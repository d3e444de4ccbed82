//! Remote recipe source.
//!
//! The controller consumes two read operations: keyword search and fetch by
//! id. Both return `'static` futures over owned arguments so the runtime can
//! spawn them without borrowing the source.

pub(crate) mod forkify;

pub use forkify::ForkifyClient;

use futures::future::BoxFuture;

use crate::error::SourceError;
use crate::models::{RawRecipe, RecipeSummary};

/// Read access to a recipe catalogue.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RecipeSource: Send + Sync {
    /// Recipes matching `query`.
    fn search(&self, query: String) -> BoxFuture<'static, Result<Vec<RecipeSummary>, SourceError>>;

    /// Full recipe data for `id`.
    fn fetch(&self, id: String) -> BoxFuture<'static, Result<RawRecipe, SourceError>>;
}
