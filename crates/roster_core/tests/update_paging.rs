use std::sync::Once;

use pretty_assertions::assert_eq;
use roster_core::{
    update, AppState, Effect, Generation, Msg, Notification, PageOutcome, ScrollMetrics,
    UserRecord,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(roster_logging::initialize_for_tests);
}

fn users(prefix: &str, count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|i| UserRecord {
            id: format!("{prefix}-{i}"),
            name: format!("User {prefix}{i}"),
            profile_picture: format!("https://img.example.com/{prefix}/{i}.jpg"),
            location: "Bergen, Norway".to_string(),
            tags: vec!["Hiking".to_string()],
        })
        .collect()
}

fn near_bottom() -> ScrollMetrics {
    ScrollMetrics {
        offset: 1450,
        viewport_height: 500,
        content_height: 2000,
    }
}

fn expect_fetch(effects: &[Effect]) -> (Generation, u32) {
    match effects {
        [Effect::FetchPage { generation, page }] => (*generation, *page),
        other => panic!("expected a single FetchPage effect, got {other:?}"),
    }
}

fn load(state: AppState, generation: Generation, page: Vec<UserRecord>) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::PageLoaded {
            generation,
            outcome: PageOutcome::Loaded(page),
        },
    )
}

/// Mounts and loads a first page of `count` users.
fn mounted_with(count: usize) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Mounted);
    let (generation, _) = expect_fetch(&effects);
    let (state, _) = load(state, generation, users("p1", count));
    state
}

#[test]
fn mount_requests_first_page_and_sets_loading() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Mounted);

    let (_, page) = expect_fetch(&effects);
    assert_eq!(page, 1);
    let view = state.view();
    assert!(view.loading);
    assert!(!view.error);
    assert!(view.dirty);
}

#[test]
fn first_page_appends_and_advances_cursor() {
    init_logging();
    let state = mounted_with(10);

    assert_eq!(state.items().len(), 10);
    assert_eq!(state.page(), 2);
    assert!(!state.is_loading());
    assert!(state.has_more());
}

#[test]
fn only_one_fetch_in_flight() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Mounted);
    expect_fetch(&effects);

    let (state, effects) = update(state, Msg::Scrolled(near_bottom()));
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::Mounted);
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::RefreshClicked);
    assert!(effects.is_empty());
    assert!(state.is_loading());
}

#[test]
fn scroll_far_from_bottom_does_not_fetch() {
    init_logging();
    let state = mounted_with(10);
    let far = ScrollMetrics {
        offset: 0,
        viewport_height: 500,
        content_height: 2000,
    };

    let (state, effects) = update(state, Msg::Scrolled(far));
    assert!(effects.is_empty());
    assert!(!state.is_loading());
}

#[test]
fn scroll_within_threshold_fetches_next_page() {
    init_logging();
    let state = mounted_with(10);
    // Exactly 100 units left below the viewport.
    let edge = ScrollMetrics {
        offset: 1400,
        viewport_height: 500,
        content_height: 2000,
    };

    let (_state, effects) = update(state, Msg::Scrolled(edge));
    let (_, page) = expect_fetch(&effects);
    assert_eq!(page, 2);
}

#[test]
fn exhausted_retries_set_error_and_keep_items() {
    init_logging();
    let state = mounted_with(10);
    let (state, effects) = update(state, Msg::Scrolled(near_bottom()));
    let (generation, _) = expect_fetch(&effects);
    let items_before = state.items().to_vec();

    let (state, _) = update(state, Msg::AttemptFailed { generation, attempt: 1 });
    let (state, _) = update(state, Msg::AttemptFailed { generation, attempt: 2 });
    assert_eq!(state.view().failed_attempts, 2);
    // Still loading between retries.
    assert!(state.is_loading());
    assert!(state.view().loading);
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            generation,
            outcome: PageOutcome::Failed,
        },
    );

    assert_eq!(effects, vec![Effect::Notify(Notification::LoadFailed)]);
    assert!(state.has_error());
    assert!(!state.is_loading());
    assert_eq!(state.items(), items_before.as_slice());
    assert_eq!(state.page(), 2);
    assert!(state.has_more());
}

#[test]
fn next_fetch_clears_error() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Mounted);
    let (generation, _) = expect_fetch(&effects);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            generation,
            outcome: PageOutcome::Failed,
        },
    );
    assert!(state.has_error());

    let (state, effects) = update(state, Msg::Scrolled(near_bottom()));
    let (_, page) = expect_fetch(&effects);
    assert_eq!(page, 1);
    assert!(!state.has_error());
    assert_eq!(state.view().failed_attempts, 0);
}

#[test]
fn empty_page_ends_pagination_until_refresh() {
    init_logging();
    let state = mounted_with(10);
    let (state, effects) = update(state, Msg::Scrolled(near_bottom()));
    let (generation, _) = expect_fetch(&effects);
    let (state, effects) = load(state, generation, Vec::new());

    assert!(effects.is_empty());
    assert!(!state.has_more());
    assert!(!state.has_error());
    assert_eq!(state.page(), 2);
    assert!(state.view().show_end_of_list);

    // Both paging entry points are inert now.
    let (state, effects) = update(state.clone(), Msg::Scrolled(near_bottom()));
    assert!(effects.is_empty());
    let before = state.clone();
    let (state, effects) = update(state, Msg::Mounted);
    assert!(effects.is_empty());
    assert_eq!(state, before);

    let (state, effects) = update(state, Msg::RefreshClicked);
    let (_, page) = expect_fetch(&effects);
    assert_eq!(page, 1);
    assert!(state.has_more());
}

#[test]
fn stale_generation_is_discarded() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Mounted);
    let (generation, _) = expect_fetch(&effects);

    let (state, effects) = load(state, generation + 7, users("ghost", 10));
    assert!(effects.is_empty());
    assert!(state.items().is_empty());
    assert!(state.is_loading());

    let (state, _) = load(state, generation, users("p1", 10));
    // Arriving twice must not apply twice.
    let (state, _) = load(state, generation, users("p1", 10));
    assert_eq!(state.items().len(), 10);
    assert_eq!(state.page(), 2);
}

#[test]
fn refresh_keeps_stale_items_until_new_page_arrives() {
    init_logging();
    let state = mounted_with(10);

    let (state, effects) = update(state, Msg::RefreshClicked);
    let (generation, page) = expect_fetch(&effects);
    assert_eq!(page, 1);
    assert_eq!(state.items().len(), 10);
    assert!(state.items()[0].id.starts_with("p1"));

    let (state, _) = load(state, generation, users("fresh", 10));
    assert!(state.items().iter().all(|u| u.id.starts_with("fresh")));
}

#[test]
fn mount_scroll_refresh_end_to_end() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Mounted);
    let (generation, page) = expect_fetch(&effects);
    assert_eq!(page, 1);
    let (state, _) = load(state, generation, users("p1", 10));
    assert_eq!(state.items().len(), 10);
    assert_eq!(state.page(), 2);

    let (state, effects) = update(state, Msg::Scrolled(near_bottom()));
    let (generation, page) = expect_fetch(&effects);
    assert_eq!(page, 2);
    let (state, _) = load(state, generation, users("p2", 10));
    assert_eq!(state.items().len(), 20);
    assert_eq!(state.page(), 3);

    let (state, effects) = update(state, Msg::RefreshClicked);
    let (generation, page) = expect_fetch(&effects);
    assert_eq!(page, 1);
    let (mut state, _) = load(state, generation, users("r1", 10));
    assert_eq!(state.items().len(), 10);
    assert_eq!(state.page(), 2);
    assert!(state.items().iter().all(|u| u.id.starts_with("r1")));
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn empty_page_on_refresh_keeps_items_and_cursor() {
    init_logging();
    let state = mounted_with(10);
    let (state, effects) = update(state, Msg::Scrolled(near_bottom()));
    let (generation, _) = expect_fetch(&effects);
    let (state, _) = load(state, generation, users("p2", 10));
    assert_eq!(state.page(), 3);
    let items_before = state.items().to_vec();

    let (state, effects) = update(state, Msg::RefreshClicked);
    let (generation, page) = expect_fetch(&effects);
    assert_eq!(page, 1);
    let (state, effects) = load(state, generation, Vec::new());

    assert!(effects.is_empty());
    assert_eq!(state.items(), items_before.as_slice());
    assert_eq!(state.page(), 3);
    assert!(!state.has_more());
    assert!(!state.has_error());
    assert!(!state.is_loading());
}

#[test]
fn refresh_while_loading_starts_no_fetch_and_in_flight_page_decides() {
    init_logging();
    let state = mounted_with(10);
    let (state, effects) = update(state, Msg::Scrolled(near_bottom()));
    let (generation, page) = expect_fetch(&effects);
    assert_eq!(page, 2);

    let (state, effects) = update(state, Msg::RefreshClicked);
    assert!(effects.is_empty());
    assert!(state.has_more());
    assert_eq!(state.in_flight().map(|f| f.generation), Some(generation));
    assert_eq!(state.in_flight().map(|f| f.is_refresh), Some(false));

    // The pagination fetch comes back empty: end of data, nothing replaced.
    let (state, effects) = load(state, generation, Vec::new());
    assert!(effects.is_empty());
    assert!(!state.has_more());
    assert!(!state.is_loading());
    assert_eq!(state.items().len(), 10);
    assert!(state.items().iter().all(|u| u.id.starts_with("p1")));
    assert_eq!(state.page(), 2);

    let (state, effects) = update(state, Msg::Scrolled(near_bottom()));
    assert!(effects.is_empty());
    let (_state, effects) = update(state, Msg::RefreshClicked);
    let (_, page) = expect_fetch(&effects);
    assert_eq!(page, 1);
}
