use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::filters::FilterCriteria;
use crate::map::REFERENCE_CENTER;
use crate::normalize::{
    normalize_id, normalize_list, normalize_location, normalize_number, normalize_text,
    null_as_default, FlexibleNumber, ListingId, RawLocation, StringList, UNKNOWN_CITY,
};

/// Number of results requested from the search service.
pub const TOP_K: u32 = 20;

/// Highest rating a professional can carry.
pub const MAX_RATING: f64 = 5.0;

/// The active user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Looking for jobs.
    #[default]
    Jobseeker,
    /// Looking for professionals.
    Employer,
}

impl Persona {
    pub const ALL: [Persona; 2] = [Persona::Jobseeker, Persona::Employer];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Map,
    List,
}

/// Canonical location. Always fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLocation")]
pub struct Location {
    pub city: String,
    /// Kilometres from the reference centre, never negative.
    pub distance: f64,
    pub lat: f64,
    pub lng: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            city: UNKNOWN_CITY.to_string(),
            distance: 0.0,
            lat: REFERENCE_CENTER.lat,
            lng: REFERENCE_CENTER.lng,
        }
    }
}

impl From<RawLocation> for Location {
    fn from(raw: RawLocation) -> Self {
        normalize_location(Some(raw))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawJob", rename_all = "camelCase")]
pub struct Job {
    pub id: Option<ListingId>,
    pub title: String,
    pub company: String,
    pub location: Location,
    pub salary: f64,
    pub work_mode: Vec<String>,
    pub skills: Vec<String>,
    pub description: String,
    pub posted_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawProfessional", rename_all = "camelCase")]
pub struct Professional {
    pub id: Option<ListingId>,
    pub name: String,
    pub title: String,
    pub location: Location,
    pub salary: f64,
    /// Clamped into `0.0..=5.0`.
    pub rating: f64,
    pub skills: Vec<String>,
    pub work_mode: Vec<String>,
    pub experience: String,
    pub certifications: Vec<String>,
    pub description: String,
    pub availability: String,
}

/// Wire shape of a job.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawJob {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    company: Option<Value>,
    #[serde(default)]
    location: Option<RawLocation>,
    #[serde(default)]
    salary: Option<FlexibleNumber>,
    #[serde(default)]
    work_mode: Option<StringList>,
    #[serde(default)]
    skills: Option<StringList>,
    #[serde(default)]
    description: Option<Value>,
    #[serde(default)]
    posted_date: Option<Value>,
}

impl From<RawJob> for Job {
    fn from(raw: RawJob) -> Self {
        Self {
            id: normalize_id(raw.id),
            title: normalize_text(raw.title),
            company: normalize_text(raw.company),
            location: normalize_location(raw.location),
            salary: normalize_number(raw.salary),
            work_mode: normalize_list(raw.work_mode),
            skills: normalize_list(raw.skills),
            description: normalize_text(raw.description),
            posted_date: normalize_text(raw.posted_date),
        }
    }
}

/// Wire shape of a professional profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfessional {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    location: Option<RawLocation>,
    #[serde(default)]
    salary: Option<FlexibleNumber>,
    #[serde(default)]
    rating: Option<FlexibleNumber>,
    #[serde(default)]
    skills: Option<StringList>,
    #[serde(default)]
    work_mode: Option<StringList>,
    #[serde(default)]
    experience: Option<Value>,
    #[serde(default)]
    certifications: Option<StringList>,
    #[serde(default)]
    description: Option<Value>,
    #[serde(default)]
    availability: Option<Value>,
}

impl From<RawProfessional> for Professional {
    fn from(raw: RawProfessional) -> Self {
        Self {
            id: normalize_id(raw.id),
            name: normalize_text(raw.name),
            title: normalize_text(raw.title),
            location: normalize_location(raw.location),
            salary: normalize_number(raw.salary),
            rating: normalize_number(raw.rating).clamp(0.0, MAX_RATING),
            skills: normalize_list(raw.skills),
            work_mode: normalize_list(raw.work_mode),
            experience: normalize_text(raw.experience),
            certifications: normalize_list(raw.certifications),
            description: normalize_text(raw.description),
            availability: normalize_text(raw.availability),
        }
    }
}

/// A single result record, discriminated by persona.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Job(Job),
    Professional(Professional),
}

impl Listing {
    /// Primary line: job title or professional name.
    pub fn headline(&self) -> &str {
        match self {
            Listing::Job(job) => &job.title,
            Listing::Professional(pro) => &pro.name,
        }
    }

    /// Secondary line: company for jobs, title for professionals.
    pub fn subline(&self) -> &str {
        match self {
            Listing::Job(job) => &job.company,
            Listing::Professional(pro) => &pro.title,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            Listing::Job(job) => &job.location,
            Listing::Professional(pro) => &pro.location,
        }
    }
}

/// Body of `POST /api/rag/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub filters: FilterCriteria,
    pub top_k: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, filters: FilterCriteria) -> Self {
        Self {
            query: query.into(),
            filters,
            top_k: TOP_K,
        }
    }
}

/// Response of the search service. Missing lists mean "no results".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub professionals: Vec<Professional>,
    #[serde(deserialize_with = "null_as_default")]
    pub jobs: Vec<Job>,
    /// Human readable summary produced by the service.
    pub response: Option<String>,
    pub query: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cached: bool,
}

impl SearchResult {
    pub fn len_for(&self, persona: Persona) -> usize {
        match persona {
            Persona::Jobseeker => self.jobs.len(),
            Persona::Employer => self.professionals.len(),
        }
    }

    pub fn is_empty_for(&self, persona: Persona) -> bool {
        self.len_for(persona) == 0
    }

    /// Listings relevant to `persona`, in service order.
    pub fn listings(&self, persona: Persona) -> Vec<Listing> {
        match persona {
            Persona::Jobseeker => self.jobs.iter().cloned().map(Listing::Job).collect(),
            Persona::Employer => self
                .professionals
                .iter()
                .cloned()
                .map(Listing::Professional)
                .collect(),
        }
    }

    pub fn listing_at(&self, persona: Persona, index: usize) -> Option<Listing> {
        match persona {
            Persona::Jobseeker => self.jobs.get(index).cloned().map(Listing::Job),
            Persona::Employer => self
                .professionals
                .get(index)
                .cloned()
                .map(Listing::Professional),
        }
    }
}
