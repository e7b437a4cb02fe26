use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_logging::catalog_debug;

use crate::{
    with_minimum_duration, EngineError, EngineEvent, EngineSettings, RemoteSource, ReqwestSource,
    RequestToken,
};

enum EngineCommand {
    FetchPage {
        token: RequestToken,
        filter: String,
        page: u32,
    },
    FetchDetail {
        token: RequestToken,
        id: u64,
    },
}

/// Runs fetches on a background tokio runtime and hands results back over a
/// channel. In-flight fetches are never cancelled; the receiver decides
/// which results still matter.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        let source = Arc::new(ReqwestSource::new(&settings)?);
        Self::with_source(source, settings.min_loading)
    }

    pub fn with_source(
        source: Arc<dyn RemoteSource>,
        min_loading: Duration,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(source.as_ref(), command, min_loading).await;
                    let _ = event_tx.send(event);
                });
            }
            catalog_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_page(&self, token: RequestToken, filter: impl Into<String>, page: u32) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage {
            token,
            filter: filter.into(),
            page,
        });
    }

    pub fn fetch_detail(&self, token: RequestToken, id: u64) {
        let _ = self.cmd_tx.send(EngineCommand::FetchDetail { token, id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    source: &dyn RemoteSource,
    command: EngineCommand,
    min_loading: Duration,
) -> EngineEvent {
    match command {
        EngineCommand::FetchPage {
            token,
            filter,
            page,
        } => {
            let result = with_minimum_duration(source.fetch_page(&filter, page), min_loading).await;
            EngineEvent::PageFetched { token, result }
        }
        EngineCommand::FetchDetail { token, id } => {
            let result = with_minimum_duration(source.fetch_detail(id), min_loading).await;
            EngineEvent::DetailFetched { token, result }
        }
    }
}
