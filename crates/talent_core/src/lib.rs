//! Talent hub core: listing model, normalization, filter criteria and the
//! pure view-state machine.
mod effect;
mod filters;
mod map;
mod model;
mod msg;
mod normalize;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filters::{
    canonical_work_mode, FilterCriteria, DEFAULT_MAX_DISTANCE_KM, DEFAULT_SALARY_MAX,
    MAX_DISTANCE_KM, MIN_DISTANCE_KM, RATING_STEP, WORK_MODE_OPTIONS,
};
pub use map::{map_embed_url, BoundingBox, GeoPoint, MAP_BOUNDS, MAP_REGION, REFERENCE_CENTER};
pub use model::{
    Job, Listing, Location, Persona, Professional, SearchRequest, SearchResult, ViewMode,
    MAX_RATING, TOP_K,
};
pub use msg::Msg;
pub use normalize::{
    normalize_id, normalize_list, normalize_location, normalize_number, normalize_text,
    FlexibleNumber, ListingId, LocationFields, RawLocation, StringList, UNKNOWN_CITY,
};
pub use state::{AppState, PendingRequest, RequestId, RequestKind, ResultStore, ViewState};
pub use update::update;
pub use view_model::{
    AppViewModel, CardView, DetailView, EmptyStateView, FilterPanelView, JobCardView,
    MainView, MapItemView, MapOverlayView, ProfessionalCardView, SummaryView, WorkModeOption,
    APP_TAGLINE, APP_TITLE, CARD_SKILL_LIMIT, MAP_OVERLAY_LIMIT,
};
