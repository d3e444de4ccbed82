
mod recipe_tests;
mod search_tests;
mod shopping_list_tests;
mod stale_response_tests;

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use mockall::predicate::eq;
use spin::Mutex;

use forkify_core::app::{AppState, Props, RecipeApp, UiAction};
use forkify_core::error::SourceError;
use forkify_core::models::{RawRecipe, RecipeSummary};
use forkify_core::source::MockRecipeSource;
use forkify_core::storage::MemoryStore;
use forkify_core::{create_test_spawner, Config, TestDriver, TestRenderer, TestRuntime};

pub(crate) use fixtures::*;

pub(crate) type TestSpawner = Box<dyn Fn(BoxFuture<'static, ()>)>;
pub(crate) type Driver = TestDriver<RecipeApp, TestRenderer<Props>, TestSpawner>;

/// Effect futures held back until a test decides to complete them.
pub(crate) type Deferred = Arc<Mutex<Vec<BoxFuture<'static, ()>>>>;

pub(crate) struct IntegrationTest {
    pub(crate) driver: Driver,
    pub(crate) renders: TestRenderer<Props>,
    pub(crate) store: MemoryStore,
    pub(crate) deferred: Deferred,
}

impl IntegrationTest {
    /// Dispatch a UI action through the latest props, then process the queue.
    pub(crate) fn act(&mut self, action: UiAction) {
        self.renders.with_last(|props| {
            props.dispatch.dispatch(action);
        });
        self.driver.process_events();
    }

    pub(crate) fn model(&self) -> &AppState {
        self.driver.model()
    }

    /// Complete held-back effects in the given order of spawning indexes.
    pub(crate) fn complete_deferred(&mut self, order: &[usize]) {
        let mut pending: Vec<Option<BoxFuture<'static, ()>>> =
            self.deferred.lock().drain(..).map(Some).collect();
        for &index in order {
            let future = pending[index].take().expect("effect completed twice");
            futures::executor::block_on(future);
        }
        self.driver.process_events();
    }
}

pub(crate) struct IntegrationTestBuilder {
    source: MockRecipeSource,
    store: MemoryStore,
    config: Config,
    defer_effects: bool,
}

pub(crate) fn build_integration_test() -> IntegrationTestBuilder {
    IntegrationTestBuilder {
        source: MockRecipeSource::new(),
        store: MemoryStore::new(),
        config: Config::default(),
        defer_effects: false,
    }
}

impl IntegrationTestBuilder {
    pub(crate) fn given_search_results(mut self, query: &str, results: Vec<RecipeSummary>) -> Self {
        self.source
            .expect_search()
            .with(eq(query.to_string()))
            .times(1)
            .returning(move |_| futures::future::ready(Ok(results.clone())).boxed());
        self
    }

    pub(crate) fn given_search_failure(mut self, query: &str) -> Self {
        self.source
            .expect_search()
            .with(eq(query.to_string()))
            .times(1)
            .returning(|_| {
                futures::future::ready(Err(SourceError::Transport("connection refused".into()))).boxed()
            });
        self
    }

    pub(crate) fn given_recipe(mut self, recipe: RawRecipe) -> Self {
        self.source
            .expect_fetch()
            .with(eq(recipe.id.clone()))
            .returning(move |_| futures::future::ready(Ok(recipe.clone())).boxed());
        self
    }

    pub(crate) fn given_recipe_failure(mut self, id: &str) -> Self {
        let url = format!("http://api.test/api/get?rId={id}");
        self.source
            .expect_fetch()
            .with(eq(id.to_string()))
            .returning(move |_| {
                futures::future::ready(Err(SourceError::Status {
                    status: 404,
                    url: url.clone(),
                }))
                .boxed()
            });
        self
    }

    pub(crate) fn given_store(mut self, store: MemoryStore) -> Self {
        self.store = store;
        self
    }

    pub(crate) fn given_config(mut self, configure: impl FnOnce(&mut Config)) -> Self {
        configure(&mut self.config);
        self
    }

    pub(crate) fn given_deferred_effects(mut self) -> Self {
        self.defer_effects = true;
        self
    }

    pub(crate) fn build(self) -> IntegrationTest {
        let renders = TestRenderer::new();
        let deferred: Deferred = Arc::new(Mutex::new(Vec::new()));

        let spawner: TestSpawner = if self.defer_effects {
            let pending = Arc::clone(&deferred);
            Box::new(move |future: BoxFuture<'static, ()>| pending.lock().push(future))
        } else {
            Box::new(create_test_spawner())
        };

        let app = RecipeApp::new(self.config, self.source, self.store.clone());
        let runtime = TestRuntime::new(AppState::new(), app, renders.clone(), spawner);
        let mut driver = runtime.run();
        driver.process_events();

        IntegrationTest {
            driver,
            renders,
            store: self.store,
            deferred,
        }
    }
}
