use crate::view_model::{build_view, AppViewModel};
use crate::{FilterCriteria, Listing, Persona, SearchResult, ViewMode};

/// Monotonic id attached to every request issued by [`crate::update`].
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Initial listing shown before any search.
    Browse,
    /// User-submitted search.
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub kind: RequestKind,
}

/// User-facing toggles. All combinations are valid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub persona: Persona,
    pub view_mode: ViewMode,
    pub filters_open: bool,
    pub selected: Option<Listing>,
}

/// Last response for one persona plus the request it is waiting for.
///
/// Only the most recently issued request may land: completions carrying any
/// other id are dropped, so a slow early response never overwrites a newer one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultStore {
    result: Option<SearchResult>,
    pending: Option<PendingRequest>,
    searched: bool,
}

impl ResultStore {
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// True while a user search (not the initial browse) is in flight.
    pub fn is_searching(&self) -> bool {
        matches!(
            self.pending,
            Some(PendingRequest {
                kind: RequestKind::Search,
                ..
            })
        )
    }

    /// Whether a user search has completed for this persona.
    pub fn has_searched(&self) -> bool {
        self.searched
    }

    pub fn pending(&self) -> Option<PendingRequest> {
        self.pending
    }

    pub(crate) fn begin(&mut self, request: PendingRequest) {
        self.pending = Some(request);
    }

    pub(crate) fn complete(&mut self, id: RequestId, result: SearchResult) -> bool {
        match self.take_pending(id) {
            Some(pending) => {
                if pending.kind == RequestKind::Search {
                    self.searched = true;
                }
                self.result = Some(result);
                true
            }
            None => false,
        }
    }

    /// Clears loading; the previous result stays untouched.
    pub(crate) fn fail(&mut self, id: RequestId) -> bool {
        self.take_pending(id).is_some()
    }

    fn take_pending(&mut self, id: RequestId) -> Option<PendingRequest> {
        match self.pending {
            Some(pending) if pending.id == id => self.pending.take(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    query: String,
    filters: FilterCriteria,
    view: ViewState,
    jobs: ResultStore,
    professionals: ResultStore,
    notification: Option<String>,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        build_view(self)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn persona(&self) -> Persona {
        self.view.persona
    }

    pub fn store(&self, persona: Persona) -> &ResultStore {
        match persona {
            Persona::Jobseeker => &self.jobs,
            Persona::Employer => &self.professionals,
        }
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    /// Whether the search trigger should accept input right now.
    pub fn can_search(&self) -> bool {
        !self.store(self.view.persona).is_searching()
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.mark_dirty();
        }
    }

    /// Applies `edit` and marks dirty when it reports a change.
    pub(crate) fn edit_filters(&mut self, edit: impl FnOnce(&mut FilterCriteria) -> bool) {
        if edit(&mut self.filters) {
            self.mark_dirty();
        }
    }

    pub(crate) fn view_state_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub(crate) fn store_mut(&mut self, persona: Persona) -> &mut ResultStore {
        match persona {
            Persona::Jobseeker => &mut self.jobs,
            Persona::Employer => &mut self.professionals,
        }
    }

    pub(crate) fn begin_request(&mut self, persona: Persona, kind: RequestKind) -> RequestId {
        self.last_request_id += 1;
        let id = self.last_request_id;
        self.store_mut(persona).begin(PendingRequest { id, kind });
        self.mark_dirty();
        id
    }

    pub(crate) fn set_notification(&mut self, message: Option<String>) {
        if self.notification != message {
            self.notification = message;
            self.mark_dirty();
        }
    }
}
