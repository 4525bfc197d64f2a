use crate::state::RequestKind;
use crate::{AppState, Effect, Msg, Persona, SearchRequest};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            let query = state.query().trim();
            if query.is_empty() {
                return (state, Vec::new());
            }
            let persona = state.persona();
            let request = SearchRequest::new(query, state.filters().clone());
            // A search submitted while another is pending supersedes it.
            let request_id = state.begin_request(persona, RequestKind::Search);
            vec![Effect::Search {
                request_id,
                persona,
                request,
            }]
        }
        Msg::PersonaSelected(persona) => {
            if state.persona() != persona {
                // The selection indexes the other persona's results.
                let view = state.view_state_mut();
                view.persona = persona;
                view.selected = None;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ViewModeSelected(mode) => {
            if state.view_state().view_mode != mode {
                state.view_state_mut().view_mode = mode;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FiltersToggled => {
            let view = state.view_state_mut();
            view.filters_open = !view.filters_open;
            state.mark_dirty();
            Vec::new()
        }
        Msg::MaxDistanceChanged(km) => {
            state.edit_filters(|filters| filters.set_max_distance(km));
            Vec::new()
        }
        Msg::MinRatingChanged(rating) => {
            state.edit_filters(|filters| filters.set_min_rating(rating));
            Vec::new()
        }
        Msg::WorkModeToggled { mode, enabled } => {
            state.edit_filters(|filters| filters.set_work_mode(&mode, enabled));
            Vec::new()
        }
        Msg::SalaryRangeChanged { min, max } => {
            state.edit_filters(|filters| filters.set_salary_range(min, max));
            Vec::new()
        }
        Msg::ItemSelected { index } => {
            let persona = state.persona();
            let listing = state
                .store(persona)
                .result()
                .and_then(|result| result.listing_at(persona, index));
            if let Some(listing) = listing {
                state.view_state_mut().selected = Some(listing);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SelectionCleared => {
            if state.view_state_mut().selected.take().is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SessionStarted => Persona::ALL
            .into_iter()
            .map(|persona| Effect::Browse {
                request_id: state.begin_request(persona, RequestKind::Browse),
                persona,
            })
            .collect(),
        Msg::SearchCompleted {
            request_id,
            persona,
            result,
        } => {
            if state.store_mut(persona).complete(request_id, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SearchFailed {
            request_id,
            persona,
            message,
        } => {
            if state.store_mut(persona).fail(request_id) {
                state.mark_dirty();
                state.set_notification(Some(format!(
                    "Error connecting to backend. {message}"
                )));
            }
            Vec::new()
        }
        Msg::NotificationDismissed => {
            state.set_notification(None);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
