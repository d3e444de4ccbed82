//! Model-View-Update core for a recipe discovery application.
//!
//! A user searches recipes by keyword, views one recipe's ingredients,
//! servings and cooking time, adds ingredients to a shopping list and likes
//! recipes for later. Likes survive restarts through a storage slot.
//!
//! The crate has two layers:
//!
//! - a small MVU runtime ([`Runtime`], [`Controller`], [`Effect`],
//!   [`Emitter`], [`Renderer`], [`Spawner`]) that owns the model and runs
//!   events through it one at a time;
//! - the recipe application ([`app`]) built on it, with the feature state in
//!   [`models`] and the external collaborators behind [`source::RecipeSource`]
//!   and [`storage::LikesStore`].
//!
//! ## Example
//!
//! ```rust
//! use forkify_core::app::{AppState, RecipeApp, UiAction};
//! use forkify_core::source::ForkifyClient;
//! use forkify_core::storage::MemoryStore;
//! use forkify_core::{create_test_spawner, Config, TestRenderer, TestRuntime};
//!
//! let config = Config::default();
//! let source = ForkifyClient::new(&config.api_base)?;
//! let app = RecipeApp::new(config, source, MemoryStore::new());
//!
//! let renderer = TestRenderer::new();
//! let runtime = TestRuntime::new(AppState::new(), app, renderer.clone(), create_test_spawner());
//! let _driver = runtime.run();
//!
//! renderer.with_last(|props| {
//!     assert!(!props.likes.menu_visible);
//!     assert!(!props.dispatch.dispatch(UiAction::SubmitSearch("  ".into())));
//! });
//! # Ok::<(), forkify_core::error::ConfigError>(())
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod source;
pub mod storage;
pub mod terminal;

mod controller;
mod effect;
mod emitter;
mod renderer;
mod runtime;

pub use config::Config;
pub use controller::Controller;
pub use effect::Effect;
pub use emitter::Emitter;
pub use renderer::Renderer;
pub use runtime::{Runtime, Spawner};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{create_test_spawner, TestDriver, TestRuntime};
