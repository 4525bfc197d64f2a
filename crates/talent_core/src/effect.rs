use crate::{Persona, RequestId, SearchRequest};

/// Side effects requested by [`crate::update`], executed by the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send `request` to the listing source configured for `persona`.
    Search {
        request_id: RequestId,
        persona: Persona,
        request: SearchRequest,
    },
    /// Ask the source for `persona` for its initial listing.
    Browse {
        request_id: RequestId,
        persona: Persona,
    },
}
