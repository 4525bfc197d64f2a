use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use hub_logging::{hub_debug, hub_warn};
use talent_core::{Persona, SearchRequest};

use crate::{EngineEvent, RequestId, Sources};

enum EngineCommand {
    Search {
        request_id: RequestId,
        persona: Persona,
        request: SearchRequest,
    },
    Browse {
        request_id: RequestId,
        persona: Persona,
    },
}

/// Runs listing requests on a background tokio runtime.
///
/// Requests run concurrently; completions come back through [`EngineHandle::try_recv`]
/// in the order they finish, tagged with the id they were issued under.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(sources: Sources) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("talent-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let sources = sources.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(&sources, command, event_tx).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn search(&self, request_id: RequestId, persona: Persona, request: SearchRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            request_id,
            persona,
            request,
        });
    }

    pub fn browse(&self, request_id: RequestId, persona: Persona) {
        let _ = self.cmd_tx.send(EngineCommand::Browse {
            request_id,
            persona,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    sources: &Sources,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let (request_id, persona, result) = match command {
        EngineCommand::Search {
            request_id,
            persona,
            request,
        } => {
            let source = sources.for_persona(persona);
            hub_debug!(
                "Search #{} for {:?} via {} source",
                request_id,
                persona,
                source.name()
            );
            (request_id, persona, source.search(&request).await)
        }
        EngineCommand::Browse {
            request_id,
            persona,
        } => {
            let source = sources.for_persona(persona);
            hub_debug!(
                "Browse #{} for {:?} via {} source",
                request_id,
                persona,
                source.name()
            );
            (request_id, persona, source.browse().await)
        }
    };

    if let Err(err) = &result {
        hub_warn!("Request #{} for {:?} failed: {}", request_id, persona, err);
    }
    let _ = event_tx.send(EngineEvent::SearchCompleted {
        request_id,
        persona,
        result,
    });
}
