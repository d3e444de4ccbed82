//! The recipe application controller.
//!
//! [`RecipeApp`] is the only place where the feature areas meet: every event
//! lands here, mutates one or more slots of [`AppState`], and possibly starts
//! a fetch whose outcome comes back as another event.

use std::sync::Arc;

use spin::Mutex;
use tracing::{debug, info, warn};

use crate::error::{AppError, SourceError};
use crate::models::{
    ItemId, Likes, RawRecipe, Recipe, RecipeSummary, SearchSession, ServingsChange, ShoppingList,
};
use crate::source::RecipeSource;
use crate::storage::LikesStore;
use crate::{Config, Controller, Effect, Emitter};

use super::dispatch::Dispatcher;
use super::event::{Event, RequestId};
use super::state::{AppState, RecipeState, SearchState};
use super::view::{derive_props, Props, ViewOptions};

/// Controller wiring the recipe source and likes storage to the state.
pub struct RecipeApp {
    source: Arc<dyn RecipeSource>,
    store: Mutex<Box<dyn LikesStore>>,
    config: Config,
}

impl RecipeApp {
    pub fn new<S, L>(config: Config, source: S, store: L) -> Self
    where
        S: RecipeSource + 'static,
        L: LikesStore + 'static,
    {
        Self {
            source: Arc::new(source),
            store: Mutex::new(Box::new(store)),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn view_options(&self) -> ViewOptions {
        ViewOptions {
            results_per_page: self.config.results_per_page,
            title_limit: self.config.title_limit,
        }
    }

    fn is_stale(&self, pending: Option<RequestId>, request: RequestId) -> bool {
        self.config.discard_stale_responses && pending != Some(request)
    }

    fn submit_search(&self, state: &mut AppState, query: String) -> Effect<Event> {
        let query = query.trim().to_string();
        if query.is_empty() {
            debug!("ignoring empty search");
            return Effect::none();
        }

        let request = state.issue_request();
        debug!(%query, %request, "starting search");
        state.search = SearchState::Searching {
            query: query.clone(),
            request,
        };

        let source = Arc::clone(&self.source);
        Effect::future(move || async move {
            let outcome = source.search(query.clone()).await;
            Event::SearchCompleted {
                request,
                query,
                outcome,
            }
        })
    }

    fn complete_search(
        &self,
        state: &mut AppState,
        request: RequestId,
        query: String,
        outcome: Result<Vec<RecipeSummary>, SourceError>,
    ) {
        if self.is_stale(state.search.pending(), request) {
            warn!(%query, %request, "discarding stale search response");
            return;
        }

        match outcome {
            Ok(result) => {
                info!(%query, results = result.len(), "search completed");
                state.search = SearchState::Ready {
                    session: SearchSession::new(query, result),
                    page: 1,
                };
            }
            Err(e) => {
                warn!(%query, error = %e, "search failed");
                let error = AppError::Search(e);
                state.notice = Some(error.clone());
                state.search = SearchState::Failed { query, error };
            }
        }
    }

    fn go_to_page(&self, state: &mut AppState, target: usize) {
        match &mut state.search {
            SearchState::Ready { session, page } if session.has_page(target, self.config.results_per_page) => {
                debug!(from = *page, to = target, "changing result page");
                *page = target;
            }
            _ => debug!(page = target, "ignoring page request without matching results"),
        }
    }

    fn load_recipe(&self, state: &mut AppState, id: String) -> Effect<Event> {
        let id = id.trim().trim_start_matches('#').to_string();
        if id.is_empty() {
            debug!("ignoring empty location");
            return Effect::none();
        }

        let request = state.issue_request();
        debug!(%id, %request, "loading recipe");
        state.location = Some(id.clone());
        state.recipe = RecipeState::Loading {
            id: id.clone(),
            request,
        };

        let source = Arc::clone(&self.source);
        Effect::future(move || async move {
            let outcome = source.fetch(id.clone()).await;
            Event::RecipeFetched { request, id, outcome }
        })
    }

    fn complete_recipe(
        &self,
        state: &mut AppState,
        request: RequestId,
        id: String,
        outcome: Result<RawRecipe, SourceError>,
    ) {
        if self.is_stale(state.recipe.pending(), request) {
            warn!(%id, %request, "discarding stale recipe response");
            return;
        }

        match outcome {
            Ok(raw) => {
                let recipe = Recipe::from_raw(RawRecipe { id: id.clone(), ..raw });
                info!(%id, ingredients = recipe.ingredients.len(), "recipe loaded");
                state.recipe = RecipeState::Loaded(recipe);
            }
            Err(e) => {
                warn!(%id, error = %e, "recipe failed to load");
                let error = AppError::RecipeLoad(e);
                state.notice = Some(error.clone());
                state.recipe = RecipeState::Failed { id, error };
            }
        }
    }

    fn change_servings(&self, state: &mut AppState, change: ServingsChange) {
        let Some(recipe) = state.recipe.recipe_mut() else {
            debug!(?change, "no recipe loaded, ignoring servings change");
            return;
        };

        if change == ServingsChange::Decrease && !recipe.can_decrease() {
            debug!(servings = recipe.servings, "servings already at minimum");
            return;
        }

        recipe.update_servings(change);
        debug!(servings = recipe.servings, "servings updated");
    }

    fn add_to_list(&self, state: &mut AppState) {
        let Some(recipe) = state.recipe.recipe() else {
            debug!("no recipe loaded, nothing to add to the list");
            return;
        };

        let list = state.list.get_or_insert_with(ShoppingList::new);
        for ingredient in &recipe.ingredients {
            list.add_item(ingredient.count, ingredient.unit.clone(), ingredient.ingredient.clone());
        }
        debug!(added = recipe.ingredients.len(), total = list.len(), "ingredients added to list");
    }

    fn delete_list_item(&self, state: &mut AppState, id: &ItemId) {
        let removed = state.list.as_mut().and_then(|list| list.delete_item(id));
        if removed.is_none() {
            debug!(%id, "list item not found");
        }
    }

    fn update_list_count(&self, state: &mut AppState, id: &ItemId, count: f64) {
        let updated = state.list.as_mut().is_some_and(|list| list.update_count(id, count));
        if !updated {
            debug!(%id, "list item not found");
        }
    }

    fn toggle_like(&self, state: &mut AppState) {
        let Some(recipe) = state.recipe.recipe() else {
            debug!("no recipe loaded, ignoring like toggle");
            return;
        };

        if state.likes.is_liked(&recipe.id) {
            state.likes.delete_like(&recipe.id);
            debug!(id = %recipe.id, "recipe unliked");
        } else {
            state
                .likes
                .add_like(&recipe.id, &recipe.title, &recipe.author, &recipe.img);
            debug!(id = %recipe.id, "recipe liked");
        }

        self.persist_likes(&state.likes);
    }

    fn persist_likes(&self, likes: &Likes) {
        let mut store = self.store.lock();
        if let Err(e) = likes.persist(&mut **store) {
            warn!(error = %e, "failed to persist likes");
        }
    }
}

impl Controller for RecipeApp {
    type Event = Event;
    type Model = AppState;
    type Props = Props;

    fn init(&self, mut model: AppState) -> (AppState, Effect<Event>) {
        model.likes = Likes::restore(&**self.store.lock());
        info!(likes = model.likes.total(), "application started");

        let effect = match self.config.initial_recipe.clone() {
            Some(id) => self.load_recipe(&mut model, id),
            None => Effect::none(),
        };
        (model, effect)
    }

    fn update(&self, event: Event, model: &AppState) -> (AppState, Effect<Event>) {
        let mut state = model.clone();
        state.notice = None;

        let effect = match event {
            Event::SearchSubmitted(query) => self.submit_search(&mut state, query),
            Event::SearchCompleted {
                request,
                query,
                outcome,
            } => {
                self.complete_search(&mut state, request, query, outcome);
                Effect::none()
            }
            Event::PageRequested(page) => {
                self.go_to_page(&mut state, page);
                Effect::none()
            }
            Event::LocationChanged(id) => self.load_recipe(&mut state, id),
            Event::RecipeFetched { request, id, outcome } => {
                self.complete_recipe(&mut state, request, id, outcome);
                Effect::none()
            }
            Event::ServingsChanged(change) => {
                self.change_servings(&mut state, change);
                Effect::none()
            }
            Event::AddIngredientsToList => {
                self.add_to_list(&mut state);
                Effect::none()
            }
            Event::ListItemDeleted(id) => {
                self.delete_list_item(&mut state, &id);
                Effect::none()
            }
            Event::ListItemCountChanged { id, count } => {
                self.update_list_count(&mut state, &id, count);
                Effect::none()
            }
            Event::LikeToggled => {
                self.toggle_like(&mut state);
                Effect::none()
            }
        };

        (state, effect)
    }

    fn view(&self, model: &AppState, emitter: &Emitter<Event>) -> Props {
        derive_props(model, self.view_options(), Dispatcher::new(emitter.clone()))
    }
}
