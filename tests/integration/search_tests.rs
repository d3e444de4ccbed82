use forkify_core::app::{SearchState, UiAction};
use forkify_core::models::PageButton;

use super::{build_integration_test, summaries, PIZZA_DOUGH_ID};

#[test]
fn given_twelve_results_when_searching_should_render_first_page() {
    let mut test = build_integration_test()
        .given_search_results("pizza", summaries(12))
        .build();

    test.act(UiAction::SubmitSearch("pizza".into()));

    let session = test.model().search.session().expect("search results");
    assert_eq!(session.query, "pizza");
    assert_eq!(session.result.len(), 12);

    test.renders.with_last(|props| {
        assert!(!props.search.loading);
        assert_eq!(props.search.page, 1);
        assert_eq!(props.search.results.len(), 10);
        assert_eq!(props.search.buttons, vec![PageButton::Next(2)]);
    });
}

#[test]
fn given_results_when_paginating_should_not_fetch_again() {
    // The mock allows exactly one search call.
    let mut test = build_integration_test()
        .given_search_results("pizza", summaries(12))
        .build();

    test.act(UiAction::SubmitSearch("pizza".into()));
    test.act(UiAction::GoToPage(2));

    test.renders.with_last(|props| {
        let ids: Vec<_> = props.search.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1011", "1012"]);
        assert_eq!(props.search.buttons, vec![PageButton::Prev(1)]);
    });

    test.act(UiAction::GoToPage(1));
    test.renders.with_last(|props| assert_eq!(props.search.results.len(), 10));
}

#[test]
fn given_results_when_requesting_missing_page_should_keep_current_page() {
    let mut test = build_integration_test()
        .given_search_results("pizza", summaries(12))
        .build();

    test.act(UiAction::SubmitSearch("pizza".into()));
    test.act(UiAction::GoToPage(7));

    assert!(matches!(test.model().search, SearchState::Ready { page: 1, .. }));
}

#[test]
fn given_no_search_when_paginating_should_do_nothing() {
    let mut test = build_integration_test().build();

    test.act(UiAction::GoToPage(2));

    assert_eq!(test.model().search, SearchState::Idle);
}

#[test]
fn given_a_blank_query_when_submitting_should_not_search() {
    let mut test = build_integration_test().build();
    let before = test.renders.count();

    test.act(UiAction::SubmitSearch("   ".into()));

    assert_eq!(test.renders.count(), before);
    assert_eq!(test.model().search, SearchState::Idle);
}

#[test]
fn given_a_failing_source_when_searching_should_alert_and_keep_no_results() {
    let mut test = build_integration_test()
        .given_search_results("pizza", summaries(3))
        .given_search_failure("broccoli")
        .build();

    test.act(UiAction::SubmitSearch("pizza".into()));
    test.act(UiAction::SubmitSearch("broccoli".into()));

    assert!(matches!(test.model().search, SearchState::Failed { .. }));
    test.renders.with_last(|props| {
        assert_eq!(
            props.notice.as_deref(),
            Some("Something went wrong with the search query.")
        );
        assert!(!props.search.loading);
        assert!(props.search.results.is_empty());
    });

    // The alert belongs to a single frame.
    test.act(UiAction::GoToPage(1));
    test.renders.with_last(|props| assert_eq!(props.notice, None));
}

#[test]
fn given_pending_search_should_render_loading_indicator() {
    let mut test = build_integration_test()
        .given_search_results("pizza", summaries(2))
        .given_deferred_effects()
        .build();

    test.act(UiAction::SubmitSearch("pizza".into()));
    test.renders.with_last(|props| {
        assert!(props.search.loading);
        assert!(props.search.results.is_empty());
    });

    test.complete_deferred(&[0]);
    test.renders.with_last(|props| {
        assert!(!props.search.loading);
        assert_eq!(props.search.results.len(), 2);
    });
}

#[test]
fn given_open_recipe_in_results_should_mark_it_selected() {
    let mut results = summaries(3);
    results[1].id = PIZZA_DOUGH_ID.to_string();
    let mut test = build_integration_test()
        .given_search_results("pizza", results)
        .given_recipe(super::pizza_dough())
        .build();

    test.act(UiAction::SubmitSearch("pizza".into()));
    test.act(UiAction::Navigate(format!("#{PIZZA_DOUGH_ID}")));

    test.renders.with_last(|props| {
        let selected: Vec<_> = props
            .search
            .results
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(selected, vec![PIZZA_DOUGH_ID]);
    });
}

#[test]
fn given_long_titles_should_shorten_them_in_results() {
    let mut results = summaries(1);
    results[0].title = "Pasta with tomato and spinach".to_string();
    let mut test = build_integration_test()
        .given_search_results("pasta", results)
        .build();

    test.act(UiAction::SubmitSearch("pasta".into()));

    test.renders
        .with_last(|props| assert_eq!(props.search.results[0].title, "Pasta with tomato ..."));
}
