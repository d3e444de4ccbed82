//! Application state threaded through the controller.
//!
//! The runtime owns a single [`AppState`]. Each feature area is a slot in it,
//! and the navigation state machines that used to be implied by which slots
//! were filled are spelled out as [`SearchState`] and [`RecipeState`].

use crate::error::AppError;
use crate::models::{Likes, Recipe, SearchSession, ShoppingList};

use super::event::RequestId;

/// Search flow: `Idle → Searching → Ready | Failed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching {
        query: String,
        request: RequestId,
    },
    Ready {
        session: SearchSession,
        /// Page currently shown, 1-based.
        page: usize,
    },
    Failed {
        query: String,
        error: AppError,
    },
}

impl SearchState {
    pub fn session(&self) -> Option<&SearchSession> {
        match self {
            SearchState::Ready { session, .. } => Some(session),
            _ => None,
        }
    }

    /// Request id awaited by this state, if a fetch is in flight.
    pub fn pending(&self) -> Option<RequestId> {
        match self {
            SearchState::Searching { request, .. } => Some(*request),
            _ => None,
        }
    }
}

/// Recipe flow: `Unloaded → Loading → Loaded | Failed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RecipeState {
    #[default]
    Unloaded,
    Loading {
        id: String,
        request: RequestId,
    },
    Loaded(Recipe),
    Failed {
        id: String,
        error: AppError,
    },
}

impl RecipeState {
    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            RecipeState::Loaded(recipe) => Some(recipe),
            _ => None,
        }
    }

    pub fn recipe_mut(&mut self) -> Option<&mut Recipe> {
        match self {
            RecipeState::Loaded(recipe) => Some(recipe),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<RequestId> {
        match self {
            RecipeState::Loading { request, .. } => Some(*request),
            _ => None,
        }
    }
}

/// The single application state container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub search: SearchState,
    pub recipe: RecipeState,
    /// Created on the first add.
    pub list: Option<ShoppingList>,
    pub likes: Likes,
    /// Recipe id from the current location.
    pub location: Option<String>,
    /// Alert for the render following the failure; cleared on the next event.
    pub notice: Option<AppError>,
    next_request: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next fetch generation token.
    pub fn issue_request(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }
}
