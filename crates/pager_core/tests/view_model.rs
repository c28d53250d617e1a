use pager_core::{
    update, Effect, FetchError, Footer, ListConfig, ListState, Msg, Placeholder,
};

fn loaded_with(items: Vec<&'static str>) -> ListState<&'static str> {
    let (state, effects) = update(ListState::new(ListConfig::default()), Msg::Load);
    let Effect::FetchPage { request, .. } = effects[0];
    let (state, _) = update(
        state,
        Msg::PageFetched {
            request,
            result: Ok(items),
        },
    );
    state
}

#[test]
fn idle_view_shows_not_loaded_placeholder() {
    let view = ListState::<&str>::new(ListConfig::default()).view();

    assert_eq!(view.phase, "idle");
    assert_eq!(view.placeholder, Some(Placeholder::NotLoaded));
    assert_eq!(view.footer, Footer::None);
    assert!(!view.can_load_more);
    assert!(!view.show_spinner);
}

#[test]
fn loading_view_keeps_rows_and_shows_spinner() {
    let state = loaded_with(vec!["a", "b"]);
    let (state, _) = update(
        state,
        Msg::LoadMore {
            limit: None,
            offset: None,
        },
    );
    let view = state.view();

    assert_eq!(view.item_count, 2);
    assert!(view.show_spinner);
    assert_eq!(view.footer, Footer::Spinner);
    assert!(!view.can_load_more);
}

#[test]
fn empty_and_exhausted_views_differ() {
    let empty = loaded_with(Vec::new()).view();
    assert_eq!(empty.placeholder, Some(Placeholder::NoItems));
    assert_eq!(empty.footer, Footer::None);

    let (state, effects) = update(
        loaded_with(vec!["a"]),
        Msg::LoadMore {
            limit: None,
            offset: None,
        },
    );
    let Effect::FetchPage { request, .. } = effects[0];
    let (state, _) = update(
        state,
        Msg::PageFetched {
            request,
            result: Ok(Vec::new()),
        },
    );
    let exhausted = state.view();

    assert_eq!(exhausted.placeholder, None);
    assert_eq!(exhausted.footer, Footer::NoMoreItems);
    assert!(!exhausted.can_load_more);
}

#[test]
fn failed_view_reports_error_and_allows_retry() {
    let (state, effects) = update(loaded_with(vec!["a"]), Msg::Load);
    let Effect::FetchPage { request, .. } = effects[0];
    let (state, _) = update(
        state,
        Msg::PageFetched {
            request,
            result: Err(FetchError::new("connection refused")),
        },
    );
    let view = state.view();

    assert_eq!(view.item_count, 1);
    assert_eq!(view.footer, Footer::Error("connection refused".to_string()));
    assert!(view.can_load_more);
}
