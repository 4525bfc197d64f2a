use std::sync::Arc;

use talent_core::{Persona, SearchRequest, SearchResult};

use crate::catalog::StaticListingSource;
use crate::remote::{RemoteListingSource, SearchSettings};
use crate::SearchError;

/// Anything that can answer a search for one kind of listing.
#[async_trait::async_trait]
pub trait ListingSource: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError>;

    /// Listing shown before the user searches. Empty unless the source has
    /// something cheap to offer.
    async fn browse(&self) -> Result<SearchResult, SearchError> {
        Ok(SearchResult::default())
    }

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Built-in catalog, searched locally.
    Static,
    /// Search service over HTTP.
    Remote,
}

/// Which source serves each persona.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub jobs: SourceKind,
    pub professionals: SourceKind,
    pub settings: SearchSettings,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            jobs: SourceKind::Static,
            professionals: SourceKind::Remote,
            settings: SearchSettings::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("built-in catalog is malformed: {0}")]
    Catalog(#[from] serde_json::Error),
    #[error("search service misconfigured: {0}")]
    Remote(#[from] SearchError),
}

/// Listing sources keyed by persona.
#[derive(Clone)]
pub struct Sources {
    jobs: Arc<dyn ListingSource>,
    professionals: Arc<dyn ListingSource>,
}

impl Sources {
    pub fn new(jobs: Arc<dyn ListingSource>, professionals: Arc<dyn ListingSource>) -> Self {
        Self {
            jobs,
            professionals,
        }
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        Ok(Self::new(
            build_source(config.jobs, &config.settings)?,
            build_source(config.professionals, &config.settings)?,
        ))
    }

    pub fn for_persona(&self, persona: Persona) -> &dyn ListingSource {
        match persona {
            Persona::Jobseeker => self.jobs.as_ref(),
            Persona::Employer => self.professionals.as_ref(),
        }
    }
}

fn build_source(
    kind: SourceKind,
    settings: &SearchSettings,
) -> Result<Arc<dyn ListingSource>, SourceError> {
    Ok(match kind {
        SourceKind::Static => Arc::new(StaticListingSource::builtin()?),
        SourceKind::Remote => Arc::new(RemoteListingSource::new(settings.clone())?),
    })
}
