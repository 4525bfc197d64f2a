use std::io;
use std::iter;

use hub_logging::{hub_debug, hub_warn};
use talent_core::{Effect, Msg};
use talent_engine::{EngineEvent, EngineHandle, Sources};

/// Executes effects on the engine and turns its events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(sources: Sources) -> io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(sources)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Search {
                    request_id,
                    persona,
                    request,
                } => {
                    hub_debug!(
                        "Search #{} persona={:?} query_len={}",
                        request_id,
                        persona,
                        request.query.len()
                    );
                    self.engine.search(request_id, persona, request);
                }
                Effect::Browse {
                    request_id,
                    persona,
                } => {
                    hub_debug!("Browse #{} persona={:?}", request_id, persona);
                    self.engine.browse(request_id, persona);
                }
            }
        }
    }

    /// Completions that arrived since the last poll.
    pub fn poll(&self) -> Vec<Msg> {
        iter::from_fn(|| self.engine.try_recv())
            .map(completion_msg)
            .collect()
    }
}

fn completion_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted {
            request_id,
            persona,
            result: Ok(result),
        } => Msg::SearchCompleted {
            request_id,
            persona,
            result,
        },
        EngineEvent::SearchCompleted {
            request_id,
            persona,
            result: Err(err),
        } => {
            hub_warn!("Request #{} for {:?} failed: {}", request_id, persona, err);
            Msg::SearchFailed {
                request_id,
                persona,
                message: err.to_string(),
            }
        }
    }
}
