//! Recipe application layer: state, events, dispatch and view derivation.
//!
//! ```text
//! UiAction → dispatch table → Event → RecipeApp::update → AppState + Effect
//!                                           ↑                      ↓
//!                                           └──── fetch responses ─┘
//! ```
//!
//! - [`controller`]: the [`Controller`](crate::Controller) implementation
//! - [`dispatch`]: UI action → event table
//! - [`event`]: events and fetch generation tokens
//! - [`state`]: the application state container and its tagged flows
//! - [`view`]: props derivation and count formatting

pub mod controller;
pub mod dispatch;
pub mod event;
pub mod state;
pub mod view;

pub use controller::RecipeApp;
pub use dispatch::{parse_float, Dispatcher, UiAction};
pub use event::{Event, RequestId};
pub use state::{AppState, RecipeState, SearchState};
pub use view::{
    format_count, IngredientRow, LikeRow, LikesPanel, Props, RecipeCard, RecipePanel, ResultRow,
    SearchPanel, ShoppingRow,
};
