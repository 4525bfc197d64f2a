use crate::{Persona, RequestId, SearchResult, ViewMode};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the search box.
    QueryChanged(String),
    /// User pressed Enter or the Search button.
    SearchSubmitted,
    /// User picked "Find Jobs" or "Find Talent" in the header.
    PersonaSelected(Persona),
    /// User picked Map or List (also sent by the "View on Map" action).
    ViewModeSelected(ViewMode),
    /// User clicked Filters.
    FiltersToggled,
    /// Distance slider moved, in kilometres.
    MaxDistanceChanged(i64),
    /// Rating slider moved.
    MinRatingChanged(f64),
    /// Work-mode checkbox changed.
    WorkModeToggled { mode: String, enabled: bool },
    /// Salary range edited.
    SalaryRangeChanged { min: u64, max: u64 },
    /// User clicked a card or a map entry of the active persona.
    ItemSelected { index: usize },
    /// User closed the detail panel.
    SelectionCleared,
    /// UI is up; load the initial listings.
    SessionStarted,
    /// Listing source answered.
    SearchCompleted {
        request_id: RequestId,
        persona: Persona,
        result: SearchResult,
    },
    /// Listing source failed.
    SearchFailed {
        request_id: RequestId,
        persona: Persona,
        message: String,
    },
    /// User acknowledged the notification.
    NotificationDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
