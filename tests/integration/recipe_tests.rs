use forkify_core::app::{RecipePanel, RecipeState, UiAction};

use super::{build_integration_test, pizza_dough, PIZZA_DOUGH_ID};

fn loaded_servings(test: &super::IntegrationTest) -> u32 {
    test.model().recipe.recipe().expect("recipe loaded").servings
}

#[test]
fn given_a_recipe_when_navigating_should_render_parsed_ingredients() {
    let mut test = build_integration_test().given_recipe(pizza_dough()).build();

    test.act(UiAction::Navigate(format!("#{PIZZA_DOUGH_ID}")));

    assert_eq!(test.model().location.as_deref(), Some(PIZZA_DOUGH_ID));
    test.renders.with_last(|props| {
        let RecipePanel::Loaded(card) = &props.recipe else {
            panic!("expected a loaded recipe, got {:?}", props.recipe);
        };
        assert_eq!(card.id, PIZZA_DOUGH_ID);
        assert_eq!(card.title, "Best Pizza Dough Ever");
        assert_eq!(card.servings, 4);
        assert_eq!(card.time, 30);
        assert!(!card.liked);

        let lines: Vec<_> = card
            .ingredients
            .iter()
            .map(|row| format!("{} {} {}", row.count, row.unit, row.ingredient))
            .collect();
        assert_eq!(
            lines,
            vec!["200 g flour", "1 1/2 cup water", "2 tbsp olive oil", "?  salt to taste"]
        );
    });
}

#[test]
fn given_servings_of_four_when_increasing_should_scale_counts() {
    let mut test = build_integration_test().given_recipe(pizza_dough()).build();
    test.act(UiAction::Navigate(PIZZA_DOUGH_ID.into()));

    test.act(UiAction::IncreaseServings);

    let recipe = test.model().recipe.recipe().unwrap();
    assert_eq!(recipe.servings, 5);
    assert_eq!(recipe.ingredients[0].count, Some(250.0));
    test.renders.with_last(|props| {
        let RecipePanel::Loaded(card) = &props.recipe else {
            panic!("expected a loaded recipe");
        };
        assert_eq!(card.ingredients[0].count, "250");
        assert_eq!(card.ingredients[1].count, "1 7/8");
    });
}

#[test]
fn given_servings_change_when_reverted_should_restore_counts() {
    let mut test = build_integration_test().given_recipe(pizza_dough()).build();
    test.act(UiAction::Navigate(PIZZA_DOUGH_ID.into()));
    let original = test.model().recipe.recipe().unwrap().ingredients.clone();

    test.act(UiAction::IncreaseServings);
    test.act(UiAction::DecreaseServings);
    assert_eq!(test.model().recipe.recipe().unwrap().ingredients, original);

    test.act(UiAction::DecreaseServings);
    test.act(UiAction::IncreaseServings);
    assert_eq!(test.model().recipe.recipe().unwrap().ingredients, original);
}

#[test]
fn given_one_serving_when_decreasing_should_leave_state_unchanged() {
    let mut test = build_integration_test().given_recipe(pizza_dough()).build();
    test.act(UiAction::Navigate(PIZZA_DOUGH_ID.into()));

    for _ in 0..3 {
        test.act(UiAction::DecreaseServings);
    }
    assert_eq!(loaded_servings(&test), 1);
    test.renders.with_last(|props| {
        let RecipePanel::Loaded(card) = &props.recipe else {
            panic!("expected a loaded recipe");
        };
        assert!(!card.can_decrease);
    });

    let before = test.model().recipe.clone();
    test.act(UiAction::DecreaseServings);
    assert_eq!(test.model().recipe, before);
}

#[test]
fn given_no_recipe_when_changing_servings_should_do_nothing() {
    let mut test = build_integration_test().build();

    test.act(UiAction::IncreaseServings);

    assert_eq!(test.model().recipe, RecipeState::Unloaded);
}

#[test]
fn given_a_failing_recipe_when_navigating_should_alert_without_rendering_it() {
    let mut test = build_integration_test().given_recipe_failure("404").build();

    test.act(UiAction::Navigate("#404".into()));

    assert!(matches!(test.model().recipe, RecipeState::Failed { .. }));
    test.renders.with_last(|props| {
        assert_eq!(props.notice.as_deref(), Some("Error processing recipe."));
        assert_eq!(props.recipe, RecipePanel::Empty);
    });
}

#[test]
fn given_a_pending_fetch_should_render_loading_then_recipe() {
    let mut test = build_integration_test()
        .given_recipe(pizza_dough())
        .given_deferred_effects()
        .build();

    test.act(UiAction::Navigate(PIZZA_DOUGH_ID.into()));
    test.renders.with_last(|props| assert_eq!(props.recipe, RecipePanel::Loading));

    test.complete_deferred(&[0]);
    test.renders
        .with_last(|props| assert!(matches!(props.recipe, RecipePanel::Loaded(_))));
}

#[test]
fn given_an_initial_recipe_should_load_it_on_startup() {
    let test = build_integration_test()
        .given_recipe(pizza_dough())
        .given_config(|config| config.initial_recipe = Some(PIZZA_DOUGH_ID.to_string()))
        .build();

    assert_eq!(loaded_servings(&test), 4);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].recipe, RecipePanel::Loading);
        assert!(matches!(renders.last().unwrap().recipe, RecipePanel::Loaded(_)));
    });
}
