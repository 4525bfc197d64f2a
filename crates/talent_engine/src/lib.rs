//! Talent hub engine: listing sources and effect execution.
mod catalog;
mod engine;
mod remote;
mod source;
mod types;

pub use catalog::StaticListingSource;
pub use engine::EngineHandle;
pub use remote::{RemoteListingSource, SearchSettings, SEARCH_PATH};
pub use source::{ListingSource, SourceConfig, SourceError, SourceKind, Sources};
pub use types::{EngineEvent, FailureKind, RequestId, SearchError};
