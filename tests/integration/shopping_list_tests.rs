use std::collections::HashSet;

use forkify_core::app::UiAction;
use forkify_core::models::ItemId;

use super::{build_integration_test, pizza_dough, PIZZA_DOUGH_ID};

#[test]
fn given_no_recipe_when_adding_to_list_should_not_create_a_list() {
    let mut test = build_integration_test().build();

    test.act(UiAction::AddToList);

    assert!(test.model().list.is_none());
}

#[test]
fn given_a_recipe_when_adding_to_list_should_append_every_ingredient() {
    let mut test = build_integration_test().given_recipe(pizza_dough()).build();
    test.act(UiAction::Navigate(PIZZA_DOUGH_ID.into()));

    test.act(UiAction::AddToList);

    test.renders.with_last(|props| {
        let names: Vec<_> = props.shopping.iter().map(|row| row.ingredient.as_str()).collect();
        assert_eq!(names, vec!["flour", "water", "olive oil", "salt to taste"]);
        assert_eq!(props.shopping[0].count, Some(200.0));
        assert_eq!(props.shopping[3].count, None);
    });
}

#[test]
fn given_the_same_recipe_added_twice_should_keep_distinct_items() {
    let mut test = build_integration_test().given_recipe(pizza_dough()).build();
    test.act(UiAction::Navigate(PIZZA_DOUGH_ID.into()));

    test.act(UiAction::AddToList);
    test.act(UiAction::AddToList);

    let list = test.model().list.as_ref().unwrap();
    assert_eq!(list.len(), 8);
    let ids: HashSet<_> = list.items().iter().map(|item| item.id.clone()).collect();
    assert_eq!(ids.len(), 8);
}

#[test]
fn given_scaled_servings_when_adding_should_use_scaled_counts() {
    let mut test = build_integration_test().given_recipe(pizza_dough()).build();
    test.act(UiAction::Navigate(PIZZA_DOUGH_ID.into()));
    test.act(UiAction::IncreaseServings);

    test.act(UiAction::AddToList);

    test.renders
        .with_last(|props| assert_eq!(props.shopping[0].count, Some(250.0)));
}

#[test]
fn given_an_item_when_deleted_should_remove_only_that_item() {
    let mut test = build_integration_test().given_recipe(pizza_dough()).build();
    test.act(UiAction::Navigate(PIZZA_DOUGH_ID.into()));
    test.act(UiAction::AddToList);
    let first = test.model().list.as_ref().unwrap().items()[0].id.clone();

    test.act(UiAction::DeleteListItem(first.clone()));

    let list = test.model().list.as_ref().unwrap();
    assert_eq!(list.len(), 3);
    assert!(list.get(&first).is_none());
}

#[test]
fn given_an_unknown_id_when_deleted_should_leave_list_untouched() {
    let mut test = build_integration_test().given_recipe(pizza_dough()).build();
    test.act(UiAction::Navigate(PIZZA_DOUGH_ID.into()));
    test.act(UiAction::AddToList);
    let before = test.model().list.clone();

    test.act(UiAction::DeleteListItem(ItemId::from("does-not-exist")));

    assert_eq!(test.model().list, before);
}

#[test]
fn given_a_count_edit_should_store_the_parsed_value() {
    let mut test = build_integration_test().given_recipe(pizza_dough()).build();
    test.act(UiAction::Navigate(PIZZA_DOUGH_ID.into()));
    test.act(UiAction::AddToList);
    let id = test.model().list.as_ref().unwrap().items()[1].id.clone();

    test.act(UiAction::EditListCount(id.clone(), "3.5".into()));
    assert_eq!(test.model().list.as_ref().unwrap().get(&id).unwrap().count, Some(3.5));

    test.act(UiAction::EditListCount(id.clone(), "plenty".into()));
    let count = test.model().list.as_ref().unwrap().get(&id).unwrap().count;
    assert!(count.unwrap().is_nan());
}
