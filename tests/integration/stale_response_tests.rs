//! Out-of-order completion of overlapping fetches.

use forkify_core::app::{RecipeState, SearchState, UiAction};

use super::{build_integration_test, recipe, summaries, IntegrationTest};

fn loaded_title(test: &IntegrationTest) -> &str {
    &test.model().recipe.recipe().expect("recipe loaded").title
}

fn overlapping_recipes(discard_stale: bool) -> IntegrationTest {
    let mut test = build_integration_test()
        .given_recipe(recipe("1", "First"))
        .given_recipe(recipe("2", "Second"))
        .given_config(|config| config.discard_stale_responses = discard_stale)
        .given_deferred_effects()
        .build();

    test.act(UiAction::Navigate("#1".into()));
    test.act(UiAction::Navigate("#2".into()));
    test
}

fn overlapping_searches(discard_stale: bool) -> IntegrationTest {
    let mut test = build_integration_test()
        .given_search_results("pizza", summaries(12))
        .given_search_results("pasta", summaries(3))
        .given_config(|config| config.discard_stale_responses = discard_stale)
        .given_deferred_effects()
        .build();

    test.act(UiAction::SubmitSearch("pizza".into()));
    test.act(UiAction::SubmitSearch("pasta".into()));
    test
}

#[test]
fn given_reversed_recipe_responses_should_keep_the_latest_request() {
    let mut test = overlapping_recipes(true);
    assert!(matches!(test.model().recipe, RecipeState::Loading { ref id, .. } if id == "2"));

    test.complete_deferred(&[1, 0]);

    assert_eq!(loaded_title(&test), "Second");
    assert_eq!(test.model().location.as_deref(), Some("2"));
}

#[test]
fn given_in_order_recipe_responses_should_ignore_the_superseded_one() {
    let mut test = overlapping_recipes(true);

    test.complete_deferred(&[0, 1]);

    assert_eq!(loaded_title(&test), "Second");
}

#[test]
fn given_reversed_search_responses_should_keep_the_latest_query() {
    let mut test = overlapping_searches(true);

    test.complete_deferred(&[1, 0]);

    let session = test.model().search.session().expect("search results");
    assert_eq!(session.query, "pasta");
    assert_eq!(session.result.len(), 3);
    test.renders.with_last(|props| assert!(props.search.buttons.is_empty()));
}

#[test]
fn given_last_writer_wins_should_apply_every_recipe_response() {
    let mut test = overlapping_recipes(false);

    test.complete_deferred(&[1, 0]);

    assert_eq!(loaded_title(&test), "First");
}

#[test]
fn given_last_writer_wins_should_apply_every_search_response() {
    let mut test = overlapping_searches(false);

    test.complete_deferred(&[1, 0]);

    assert!(matches!(
        &test.model().search,
        SearchState::Ready { session, page: 1 } if session.query == "pizza"
    ));
}
