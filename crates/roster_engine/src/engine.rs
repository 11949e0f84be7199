use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use roster_core::Generation;
use roster_logging::roster_debug;

use crate::fetch::{ChannelEventSink, FetchSettings, Fetcher, ReqwestFetcher};
use crate::retry::fetch_page_with_retry;
use crate::tags::TagPicker;
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    FetchPage { generation: Generation, page: u32 },
}

/// Runs fetches on a background tokio runtime and hands results back over a
/// channel, so the caller's thread stays the only one touching app state.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, tags: Arc<dyn TagPicker>) -> Result<Self, EngineError> {
        let max_attempts = settings.max_attempts;
        let fetcher = Arc::new(ReqwestFetcher::new(settings)?);
        Self::with_fetcher(fetcher, tags, max_attempts)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn Fetcher>,
        tags: Arc<dyn TagPicker>,
        max_attempts: u32,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let tags = tags.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), tags.as_ref(), max_attempts, command, event_tx)
                        .await;
                });
            }
            roster_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_page(&self, generation: Generation, page: u32) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::FetchPage { generation, page });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    tags: &dyn TagPicker,
    max_attempts: u32,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { generation, page } => {
            let sink = ChannelEventSink::new(event_tx.clone());
            let result =
                fetch_page_with_retry(fetcher, tags, &sink, generation, page, max_attempts).await;
            let _ = event_tx.send(EngineEvent::PageCompleted { generation, result });
        }
    }
}
