use serde_json::json;
use talent_core::{
    update, AppState, CardView, Effect, Listing, MainView, Msg, Persona, SearchResult, ViewMode,
    MAP_OVERLAY_LIMIT,
};

fn init_logging() {
    hub_logging::initialize_for_tests();
}

fn apply(state: AppState, msgs: Vec<Msg>) -> AppState {
    msgs.into_iter().fold(state, |state, msg| update(state, msg).0)
}

fn complete_search(state: AppState, query: &str, result: SearchResult) -> AppState {
    let (state, _) = update(state, Msg::QueryChanged(query.to_string()));
    let (state, effects) = update(state, Msg::SearchSubmitted);
    let (request_id, persona) = match &effects[0] {
        Effect::Search {
            request_id,
            persona,
            ..
        } => (*request_id, *persona),
        other => panic!("unexpected effect {other:?}"),
    };
    update(
        state,
        Msg::SearchCompleted {
            request_id,
            persona,
            result,
        },
    )
    .0
}

fn jobs(count: usize) -> SearchResult {
    let list: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Job {i}"),
                "company": "Acme",
                "location": {"city": "Palermo", "distance": i, "lat": 0, "lng": 0},
                "salary": 100000
            })
        })
        .collect();
    serde_json::from_value(json!({ "jobs": list })).unwrap()
}

#[test]
fn all_eight_combinations_are_reachable() {
    init_logging();
    let mut seen = Vec::new();
    for persona in [Persona::Jobseeker, Persona::Employer] {
        for mode in [ViewMode::Map, ViewMode::List] {
            for open in [false, true] {
                let mut msgs = vec![Msg::PersonaSelected(persona), Msg::ViewModeSelected(mode)];
                if open {
                    msgs.push(Msg::FiltersToggled);
                }
                let view = apply(AppState::new(), msgs).view();
                assert_eq!(view.persona, persona);
                assert_eq!(view.view_mode, mode);
                assert_eq!(view.filters_open, open);
                assert_eq!(view.filter_panel.is_some(), open);
                seen.push((persona, mode, open));
            }
        }
    }
    seen.sort_by_key(|(p, m, o)| (*p as u8, *m as u8, *o));
    seen.dedup();
    assert_eq!(seen.len(), 8);
}

#[test]
fn persona_toggle_keeps_query_and_filters() {
    init_logging();
    let state = apply(
        AppState::new(),
        vec![
            Msg::QueryChanged("React developer".to_string()),
            Msg::MaxDistanceChanged(20),
            Msg::WorkModeToggled {
                mode: "Hybrid".to_string(),
                enabled: true,
            },
        ],
    );
    let filters_before = state.filters().clone();

    let state = apply(state, vec![Msg::PersonaSelected(Persona::Employer)]);
    assert_eq!(state.query(), "React developer");
    assert_eq!(state.filters(), &filters_before);

    let state = apply(state, vec![Msg::PersonaSelected(Persona::Jobseeker)]);
    assert_eq!(state.view().query, "React developer");
    assert_eq!(state.filters(), &filters_before);
}

#[test]
fn reselecting_same_persona_is_not_dirty() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::PersonaSelected(Persona::Jobseeker));
    assert!(!state.consume_dirty());
    let (mut state, _) = update(state, Msg::ViewModeSelected(ViewMode::List));
    assert!(state.consume_dirty());
}

#[test]
fn empty_employer_list_shows_find_top_talent() {
    init_logging();
    let state = apply(
        AppState::new(),
        vec![
            Msg::PersonaSelected(Persona::Employer),
            Msg::ViewModeSelected(ViewMode::List),
        ],
    );
    let result = serde_json::from_value(json!({"professionals": []})).unwrap();
    let state = complete_search(state, "React developer", result);

    match state.view().main {
        MainView::Empty(empty) => {
            assert_eq!(empty.title, "Find Top Talent");
            assert_eq!(empty.action, "View on Map");
        }
        other => panic!("expected empty state, got {other:?}"),
    }

    // The call-to-action brings the map back.
    let state = apply(state, vec![Msg::ViewModeSelected(ViewMode::Map)]);
    assert!(matches!(state.view().main, MainView::Map(_)));
}

#[test]
fn jobseeker_empty_state_depends_on_search_history() {
    init_logging();
    let state = apply(AppState::new(), vec![Msg::ViewModeSelected(ViewMode::List)]);
    match state.view().main {
        MainView::Empty(empty) => assert_eq!(empty.title, "Find Your Dream Job"),
        other => panic!("expected empty state, got {other:?}"),
    }

    let state = complete_search(state, "cobol", SearchResult::default());
    match state.view().main {
        MainView::Empty(empty) => assert_eq!(empty.title, "No jobs found"),
        other => panic!("expected empty state, got {other:?}"),
    }
}

#[test]
fn list_renders_persona_specific_cards() {
    init_logging();
    let state = apply(AppState::new(), vec![Msg::ViewModeSelected(ViewMode::List)]);
    let state = complete_search(state, "job", jobs(2));

    match state.view().main {
        MainView::Cards(cards) => {
            assert_eq!(cards.len(), 2);
            match &cards[0] {
                CardView::Job(card) => {
                    assert_eq!(card.title, "Job 0");
                    assert_eq!(card.salary_label, "$100K");
                }
                other => panic!("expected job card, got {other:?}"),
            }
        }
        other => panic!("expected cards, got {other:?}"),
    }
}

#[test]
fn map_overlay_caps_items_and_counts_all() {
    init_logging();
    let state = complete_search(AppState::new(), "job", jobs(MAP_OVERLAY_LIMIT + 3));

    match state.view().main {
        MainView::Map(map) => {
            assert_eq!(map.title, "Jobs in Buenos Aires");
            assert_eq!(map.heading, format!("{} Jobs Near You", MAP_OVERLAY_LIMIT + 3));
            assert_eq!(map.items.len(), MAP_OVERLAY_LIMIT);
            assert_eq!(map.items[0].rank, 1);
            assert!(map.embed_url.contains("openstreetmap.org"));
            assert_eq!(map.empty_message, None);
        }
        other => panic!("expected map, got {other:?}"),
    }
}

#[test]
fn empty_map_overlay_guides_employer() {
    init_logging();
    let state = apply(AppState::new(), vec![Msg::PersonaSelected(Persona::Employer)]);
    match state.view().main {
        MainView::Map(map) => {
            assert_eq!(map.heading, "0 Professionals Near You");
            assert_eq!(
                map.empty_message,
                Some("Search for professionals to see results here")
            );
        }
        other => panic!("expected map, got {other:?}"),
    }
}

#[test]
fn selection_is_independent_of_other_axes() {
    init_logging();
    let state = complete_search(AppState::new(), "job", jobs(3));
    let state = apply(state, vec![Msg::ItemSelected { index: 1 }]);

    match &state.view_state().selected {
        Some(Listing::Job(job)) => assert_eq!(job.title, "Job 1"),
        other => panic!("expected selected job, got {other:?}"),
    }

    let state = apply(
        state,
        vec![Msg::ViewModeSelected(ViewMode::List), Msg::FiltersToggled],
    );
    assert_eq!(state.view().detail.map(|d| d.heading), Some("Job 1".to_string()));

    let state = apply(state, vec![Msg::ItemSelected { index: 99 }]);
    assert!(state.view_state().selected.is_some());

    let state = apply(state, vec![Msg::SelectionCleared]);
    assert!(state.view().detail.is_none());
}

#[test]
fn persona_switch_drops_selection() {
    init_logging();
    let state = complete_search(AppState::new(), "job", jobs(2));
    let state = apply(
        state,
        vec![
            Msg::ItemSelected { index: 0 },
            Msg::PersonaSelected(Persona::Employer),
        ],
    );
    assert!(state.view_state().selected.is_none());
    assert!(state.view().detail.is_none());
}

#[test]
fn summary_is_shown_with_cached_marker() {
    init_logging();
    let result = serde_json::from_value(json!({
        "professionals": [{"name": "Ana"}],
        "response": "Found 1 professional",
        "cached": true
    }))
    .unwrap();
    let state = apply(AppState::new(), vec![Msg::PersonaSelected(Persona::Employer)]);
    let state = complete_search(state, "ana", result);

    let summary = state.view().summary.expect("summary");
    assert_eq!(summary.text, "Found 1 professional");
    assert!(summary.cached);
}

#[test]
fn search_button_reflects_loading() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::QueryChanged("rust".to_string()));
    let (state, _) = update(state, Msg::SearchSubmitted);
    let view = state.view();
    assert_eq!(view.search_label, "Searching...");
    assert!(!view.search_enabled);
}
