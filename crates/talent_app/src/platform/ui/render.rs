use talent_core::{
    AppViewModel, CardView, DetailView, EmptyStateView, FilterPanelView, JobCardView, MainView,
    MapOverlayView, ProfessionalCardView,
};

use super::layout::{persona_toggle, view_toggle, RULE};

/// Renders one full frame.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![RULE.to_string(), persona_toggle(view.persona)];

    let query = if view.query.is_empty() {
        view.search_placeholder
    } else {
        view.query.as_str()
    };
    let button = if view.search_enabled {
        format!("[{}]", view.search_label)
    } else {
        format!("[{}] (disabled)", view.search_label)
    };
    lines.push(format!("Search: {query}  {button}"));
    lines.push(view_toggle(view.view_mode, view.filters_open));

    if let Some(panel) = &view.filter_panel {
        render_filters(panel, &mut lines);
    }
    if let Some(summary) = &view.summary {
        let cached = if summary.cached { " (cached)" } else { "" };
        lines.push(format!("Summary: {}{cached}", summary.text));
    }

    lines.push(String::new());
    match &view.main {
        MainView::Map(map) => render_map(map, &mut lines),
        MainView::Cards(cards) => render_cards(cards, &mut lines),
        MainView::Empty(empty) => render_empty(empty, &mut lines),
    }

    if let Some(detail) = &view.detail {
        render_detail(detail, &mut lines);
    }
    if let Some(notification) = &view.notification {
        lines.push(String::new());
        lines.push(format!("!! {notification}"));
        lines.push("!! Type :ok to continue.".to_string());
    }
    lines
}

fn render_filters(panel: &FilterPanelView, lines: &mut Vec<String>) {
    let modes: Vec<String> = panel
        .work_modes
        .iter()
        .map(|option| {
            let check = if option.checked { "x" } else { " " };
            format!("[{check}] {}", option.label)
        })
        .collect();
    lines.push(format!("  Max distance: {} km", panel.max_distance));
    lines.push(format!("  Min rating:   {:.1}", panel.min_rating));
    lines.push(format!("  Work mode:    {}", modes.join("  ")));
    lines.push(format!(
        "  Salary:       ${} - ${}",
        panel.salary_min, panel.salary_max
    ));
}

fn render_map(map: &MapOverlayView, lines: &mut Vec<String>) {
    lines.push(map.title.clone());
    lines.push(format!("  {}", map.embed_url));
    lines.push(map.heading.clone());
    if let Some(message) = map.empty_message {
        lines.push(format!("  {message}"));
        return;
    }
    for item in &map.items {
        lines.push(format!(
            "  {:>2}. {} - {} ({}, {} km)",
            item.rank, item.headline, item.subline, item.city, item.distance_km
        ));
    }
}

fn render_cards(cards: &[CardView], lines: &mut Vec<String>) {
    for (i, card) in cards.iter().enumerate() {
        match card {
            CardView::Job(job) => job_card(i + 1, job, lines),
            CardView::Professional(pro) => professional_card(i + 1, pro, lines),
        }
    }
}

fn job_card(n: usize, job: &JobCardView, lines: &mut Vec<String>) {
    lines.push(format!("[{n}] {} at {}  {}", job.title, job.company, job.salary_label));
    lines.push(format!("    {}", job.location_label));
    if !job.work_modes.is_empty() {
        lines.push(format!("    {}", job.work_modes.join(" | ")));
    }
    if !job.skills.is_empty() {
        lines.push(format!("    Skills: {}", job.skills.join(", ")));
    }
    lines.push(format!("    {}", job.posted_label));
}

fn professional_card(n: usize, pro: &ProfessionalCardView, lines: &mut Vec<String>) {
    lines.push(format!("[{n}] {}  * {}", pro.name, pro.rating_label));
    lines.push(format!("    {}", pro.title));
    lines.push(format!("    {}", pro.location_label));
    lines.push(format!("    {}", pro.salary_label));
    if !pro.skills.is_empty() {
        lines.push(format!("    Skills: {}", pro.skills.join(", ")));
    }
    if !pro.work_modes.is_empty() {
        lines.push(format!("    {}", pro.work_modes.join(" | ")));
    }
}

fn render_empty(empty: &EmptyStateView, lines: &mut Vec<String>) {
    lines.push(empty.title.to_string());
    lines.push(format!("  {}", empty.message));
    lines.push(format!("  > {} (:map)", empty.action));
}

fn render_detail(detail: &DetailView, lines: &mut Vec<String>) {
    lines.push(String::new());
    lines.push(format!("== {} ==", detail.heading));
    for (label, value) in &detail.fields {
        lines.push(format!("  {label}: {value}"));
    }
    lines.push("  (:close to dismiss)".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use talent_core::{update, AppState, Msg, Persona, SearchResult, ViewMode};

    fn apply(state: AppState, msgs: Vec<Msg>) -> AppState {
        msgs.into_iter().fold(state, |state, msg| update(state, msg).0)
    }

    fn frame(state: &AppState) -> Vec<String> {
        render(&state.view())
    }

    fn complete(state: AppState, persona: Persona, result: SearchResult) -> AppState {
        let (state, effects) = update(state, Msg::SearchSubmitted);
        let request_id = match effects.as_slice() {
            [talent_core::Effect::Search { request_id, .. }] => *request_id,
            other => panic!("expected one search, got {other:?}"),
        };
        apply(
            state,
            vec![Msg::SearchCompleted {
                request_id,
                persona,
                result,
            }],
        )
    }

    #[test]
    fn employer_list_with_no_results_shows_find_top_talent() {
        let state = apply(
            AppState::new(),
            vec![
                Msg::PersonaSelected(Persona::Employer),
                Msg::ViewModeSelected(ViewMode::List),
                Msg::QueryChanged("React developer".to_string()),
            ],
        );
        let state = complete(state, Persona::Employer, SearchResult::default());

        let lines = frame(&state);
        assert!(lines.contains(&"Find Top Talent".to_string()));
        assert!(lines.contains(&"  > View on Map (:map)".to_string()));
        assert_eq!(lines[1], "( ) Find Jobs   (*) Find Talent");
    }

    #[test]
    fn cards_render_labels_from_the_view_model() {
        let result: SearchResult = serde_json::from_str(
            r#"{"jobs": [{
                "title": "Senior React Developer",
                "company": "TechCorp",
                "location": {"city": "Palermo", "distance": 2.5, "lat": -34.5, "lng": -58.4},
                "salary": 350000,
                "workMode": ["Híbrido"],
                "skills": "React, TypeScript, Node.js, GraphQL, Jest",
                "postedDate": "2 days ago"
            }]}"#,
        )
        .unwrap();
        let state = apply(
            AppState::new(),
            vec![
                Msg::ViewModeSelected(ViewMode::List),
                Msg::QueryChanged("react".to_string()),
            ],
        );
        let state = complete(state, Persona::Jobseeker, result);

        let lines = frame(&state);
        let start = lines
            .iter()
            .position(|line| line.starts_with("[1]"))
            .unwrap();
        assert_eq!(
            lines[start..start + 5].to_vec(),
            vec![
                "[1] Senior React Developer at TechCorp  $350K",
                "    Palermo • 2.5 km away",
                "    Híbrido",
                "    Skills: React, TypeScript, Node.js, GraphQL",
                "    Posted 2 days ago",
            ]
        );
    }

    #[test]
    fn filter_panel_and_notification_are_rendered() {
        let state = apply(
            AppState::new(),
            vec![
                Msg::FiltersToggled,
                Msg::MaxDistanceChanged(20),
                Msg::WorkModeToggled {
                    mode: "Hybrid".to_string(),
                    enabled: true,
                },
                Msg::QueryChanged("data".to_string()),
                Msg::SearchSubmitted,
            ],
        );
        let searching = frame(&state);
        assert!(searching.contains(&"Search: data  [Searching...] (disabled)".to_string()));
        assert!(searching.contains(&"  Max distance: 20 km".to_string()));
        assert!(searching.contains(&"  Work mode:    [ ] Remote  [x] Hybrid  [ ] Onsite".to_string()));

        let request_id = state.store(Persona::Jobseeker).pending().unwrap().id;
        let state = apply(
            state,
            vec![Msg::SearchFailed {
                request_id,
                persona: Persona::Jobseeker,
                message: "timeout".to_string(),
            }],
        );
        let lines = frame(&state);
        assert!(lines.contains(&"!! Error connecting to backend. timeout".to_string()));
        assert!(lines.contains(&"Search: data  [Search]".to_string()));
    }

    #[test]
    fn map_frame_lists_embed_and_empty_message() {
        let state = apply(AppState::new(), vec![Msg::PersonaSelected(Persona::Employer)]);
        let lines = frame(&state);
        assert!(lines.contains(&"Professionals in Buenos Aires".to_string()));
        assert!(lines.iter().any(|line| line.contains("openstreetmap.org/export/embed.html")));
        assert!(lines.contains(&"  Search for professionals to see results here".to_string()));
    }
}
