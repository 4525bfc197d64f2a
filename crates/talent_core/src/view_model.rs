use crate::filters::WORK_MODE_OPTIONS;
use crate::map::{map_embed_url, MAP_BOUNDS, MAP_REGION, REFERENCE_CENTER};
use crate::{AppState, Job, Listing, Location, Persona, Professional, ViewMode};

/// Entries shown in the map overlay's nearby list.
pub const MAP_OVERLAY_LIMIT: usize = 10;
/// Skills shown on a card.
pub const CARD_SKILL_LIMIT: usize = 4;

pub const APP_TITLE: &str = "TalentHub Pro";
pub const APP_TAGLINE: &str = "AI-Powered Job & Talent Matching";

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub persona: Persona,
    pub view_mode: ViewMode,
    pub query: String,
    pub search_placeholder: &'static str,
    pub search_label: &'static str,
    pub search_enabled: bool,
    pub filters_open: bool,
    pub filter_panel: Option<FilterPanelView>,
    pub main: MainView,
    pub detail: Option<DetailView>,
    pub summary: Option<SummaryView>,
    pub notification: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterPanelView {
    pub max_distance: u32,
    pub min_rating: f64,
    pub work_modes: Vec<WorkModeOption>,
    pub salary_min: u64,
    pub salary_max: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkModeOption {
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MainView {
    Map(MapOverlayView),
    Cards(Vec<CardView>),
    Empty(EmptyStateView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapOverlayView {
    pub title: String,
    pub embed_url: String,
    pub heading: String,
    pub items: Vec<MapItemView>,
    /// Shown instead of `items` when there is nothing to list.
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapItemView {
    /// 1-based position in the overlay.
    pub rank: usize,
    pub headline: String,
    pub subline: String,
    pub city: String,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardView {
    Job(JobCardView),
    Professional(ProfessionalCardView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub title: String,
    pub company: String,
    pub salary_label: String,
    pub location_label: String,
    pub work_modes: Vec<String>,
    pub skills: Vec<String>,
    pub posted_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessionalCardView {
    pub name: String,
    pub title: String,
    pub rating_label: String,
    pub location_label: String,
    pub salary_label: String,
    pub skills: Vec<String>,
    pub work_modes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStateView {
    pub title: &'static str,
    pub message: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub heading: String,
    pub fields: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub text: String,
    pub cached: bool,
}

pub(crate) fn build_view(state: &AppState) -> AppViewModel {
    let persona = state.persona();
    let view = state.view_state();
    let searching = !state.can_search();

    AppViewModel {
        persona,
        view_mode: view.view_mode,
        query: state.query().to_string(),
        search_placeholder: search_placeholder(persona),
        search_label: if searching { "Searching..." } else { "Search" },
        search_enabled: !searching,
        filters_open: view.filters_open,
        filter_panel: view.filters_open.then(|| build_filter_panel(state)),
        main: match view.view_mode {
            ViewMode::Map => MainView::Map(build_map_overlay(state)),
            ViewMode::List => build_card_grid(state),
        },
        detail: view.selected.as_ref().map(build_detail),
        summary: build_summary(state),
        notification: state.notification().map(ToOwned::to_owned),
    }
}

fn search_placeholder(persona: Persona) -> &'static str {
    match persona {
        Persona::Jobseeker => {
            "Search jobs: 'React developer remote' or 'UX designer Buenos Aires'..."
        }
        Persona::Employer => "Search talent: 'Python developer with AWS experience'...",
    }
}

fn build_filter_panel(state: &AppState) -> FilterPanelView {
    let filters = state.filters();
    let (salary_min, salary_max) = filters.salary_range();
    FilterPanelView {
        max_distance: filters.max_distance(),
        min_rating: filters.min_rating(),
        work_modes: WORK_MODE_OPTIONS
            .iter()
            .map(|label| WorkModeOption {
                label: (*label).to_string(),
                checked: filters.work_modes().contains(*label),
            })
            .collect(),
        salary_min,
        salary_max,
    }
}

fn build_map_overlay(state: &AppState) -> MapOverlayView {
    let persona = state.persona();
    let listings = state
        .store(persona)
        .result()
        .map(|result| result.listings(persona))
        .unwrap_or_default();
    let noun = match persona {
        Persona::Jobseeker => "Jobs",
        Persona::Employer => "Professionals",
    };

    MapOverlayView {
        title: format!("{noun} in {MAP_REGION}"),
        embed_url: map_embed_url(MAP_BOUNDS, REFERENCE_CENTER),
        heading: format!("{} {noun} Near You", listings.len()),
        empty_message: listings.is_empty().then_some(match persona {
            Persona::Jobseeker => "No jobs available at the moment",
            Persona::Employer => "Search for professionals to see results here",
        }),
        items: listings
            .iter()
            .take(MAP_OVERLAY_LIMIT)
            .enumerate()
            .map(|(i, listing)| MapItemView {
                rank: i + 1,
                headline: listing.headline().to_string(),
                subline: listing.subline().to_string(),
                city: listing.location().city.clone(),
                distance_km: listing.location().distance,
            })
            .collect(),
    }
}

fn build_card_grid(state: &AppState) -> MainView {
    let persona = state.persona();
    let store = state.store(persona);
    let cards: Vec<CardView> = match (persona, store.result()) {
        (Persona::Jobseeker, Some(result)) => {
            result.jobs.iter().map(job_card).map(CardView::Job).collect()
        }
        (Persona::Employer, Some(result)) => result
            .professionals
            .iter()
            .map(professional_card)
            .map(CardView::Professional)
            .collect(),
        (_, None) => Vec::new(),
    };

    if !cards.is_empty() {
        return MainView::Cards(cards);
    }

    MainView::Empty(match persona {
        Persona::Jobseeker if store.has_searched() => EmptyStateView {
            title: "No jobs found",
            message: "Try adjusting your search or filters",
            action: "View on Map",
        },
        Persona::Jobseeker => EmptyStateView {
            title: "Find Your Dream Job",
            message: "Click \"Map\" to see job locations or search for specific positions",
            action: "View on Map",
        },
        Persona::Employer => EmptyStateView {
            title: "Find Top Talent",
            message: "Search for professionals by skills, experience, or location",
            action: "View on Map",
        },
    })
}

fn job_card(job: &Job) -> JobCardView {
    JobCardView {
        title: job.title.clone(),
        company: job.company.clone(),
        salary_label: format!("${:.0}K", job.salary / 1000.0),
        location_label: location_label(&job.location),
        work_modes: job.work_mode.clone(),
        skills: job.skills.iter().take(CARD_SKILL_LIMIT).cloned().collect(),
        posted_label: format!("Posted {}", job.posted_date),
    }
}

fn professional_card(pro: &Professional) -> ProfessionalCardView {
    ProfessionalCardView {
        name: pro.name.clone(),
        title: pro.title.clone(),
        rating_label: pro.rating.to_string(),
        location_label: location_label(&pro.location),
        salary_label: format!("${}/month expected", pro.salary),
        skills: pro.skills.iter().take(CARD_SKILL_LIMIT).cloned().collect(),
        work_modes: pro.work_mode.clone(),
    }
}

fn location_label(location: &Location) -> String {
    format!("{} • {} km away", location.city, location.distance)
}

fn build_detail(listing: &Listing) -> DetailView {
    let location = listing.location();
    let mut fields = Vec::new();
    match listing {
        Listing::Job(job) => {
            fields.push(("Company", job.company.clone()));
            fields.push(("Salary", format!("${}", job.salary)));
            fields.push(("Location", location_label(location)));
            fields.push(("Work mode", job.work_mode.join(", ")));
            fields.push(("Skills", job.skills.join(", ")));
            fields.push(("Posted", job.posted_date.clone()));
            fields.push(("Description", job.description.clone()));
        }
        Listing::Professional(pro) => {
            fields.push(("Title", pro.title.clone()));
            fields.push(("Rating", format!("{}/5.0", pro.rating)));
            fields.push(("Location", location_label(location)));
            fields.push(("Salary", format!("${}/month", pro.salary)));
            fields.push(("Work mode", pro.work_mode.join(", ")));
            fields.push(("Skills", pro.skills.join(", ")));
            fields.push(("Experience", pro.experience.clone()));
            fields.push(("Certifications", pro.certifications.join(", ")));
            fields.push(("Availability", pro.availability.clone()));
            fields.push(("Description", pro.description.clone()));
        }
    }
    fields.retain(|(_, value)| !value.is_empty());
    DetailView {
        heading: listing.headline().to_string(),
        fields,
    }
}

fn build_summary(state: &AppState) -> Option<SummaryView> {
    let result = state.store(state.persona()).result()?;
    let text = result.response.as_deref()?.trim();
    if text.is_empty() {
        return None;
    }
    Some(SummaryView {
        text: text.to_string(),
        cached: result.cached,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn job_salary_renders_in_thousands() {
        let job: Job = serde_json::from_value(json!({"salary": 350000})).unwrap();
        assert_eq!(job_card(&job).salary_label, "$350K");
    }

    #[test]
    fn location_label_uses_plain_numbers() {
        let location = Location {
            city: "Palermo, Buenos Aires".into(),
            distance: 2.5,
            lat: 0.0,
            lng: 0.0,
        };
        assert_eq!(location_label(&location), "Palermo, Buenos Aires • 2.5 km away");
    }

    #[test]
    fn card_shows_first_four_skills() {
        let pro: Professional = serde_json::from_value(json!({
            "name": "Carlos",
            "skills": "AWS, Kubernetes, Terraform, CI/CD, Python",
            "salary": "6000",
            "rating": 4.6
        }))
        .unwrap();
        let card = professional_card(&pro);
        assert_eq!(card.skills, vec!["AWS", "Kubernetes", "Terraform", "CI/CD"]);
        assert_eq!(card.salary_label, "$6000/month expected");
        assert_eq!(card.rating_label, "4.6");
    }

    #[test]
    fn detail_skips_empty_fields() {
        let job: Job = serde_json::from_value(json!({"title": "Dev", "company": "Acme"})).unwrap();
        let detail = build_detail(&Listing::Job(job));
        assert_eq!(detail.heading, "Dev");
        assert!(detail.fields.iter().all(|(_, value)| !value.is_empty()));
        assert!(detail.fields.iter().any(|(name, _)| *name == "Company"));
    }
}
