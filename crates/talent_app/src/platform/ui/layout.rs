use talent_core::{Persona, ViewMode, APP_TAGLINE, APP_TITLE};

pub const RULE: &str = "------------------------------------------------------------";

pub fn banner() -> Vec<String> {
    vec![
        format!("{APP_TITLE} - {APP_TAGLINE}"),
        "Type a search and press Enter, or :help for commands.".to_string(),
    ]
}

pub fn help() -> Vec<String> {
    [
        "<text>            search for <text>",
        ":jobs / :talent   Find Jobs / Find Talent",
        ":map / :list      switch the main view",
        ":filters          show or hide the filter panel",
        ":distance N       max distance in km (5-100)",
        ":rating R         minimum rating (0-5, step 0.5)",
        ":mode NAME        toggle Remote, Hybrid or Onsite",
        ":salary MIN MAX   salary range",
        ":select N         open item N",
        ":close            close the detail panel",
        ":ok               dismiss a notification",
        ":quit             leave",
    ]
    .iter()
    .map(|line| format!("  {line}"))
    .collect()
}

/// Persona toggle with the active side marked.
pub fn persona_toggle(persona: Persona) -> String {
    format!(
        "{} Find Jobs   {} Find Talent",
        mark(persona == Persona::Jobseeker),
        mark(persona == Persona::Employer)
    )
}

pub fn view_toggle(mode: ViewMode, filters_open: bool) -> String {
    format!(
        "{} Map   {} List   Filters: {}",
        mark(mode == ViewMode::Map),
        mark(mode == ViewMode::List),
        if filters_open { "shown" } else { "hidden" }
    )
}

fn mark(active: bool) -> &'static str {
    if active {
        "(*)"
    } else {
        "( )"
    }
}
