use std::sync::Arc;
use std::time::Duration;

use roster_core::{Effect, Msg, PageOutcome};
use roster_engine::{EngineEvent, EngineHandle};
use roster_logging::{roster_debug, roster_info, roster_warn};

use super::notify::Notifier;

pub struct EffectRunner {
    engine: EngineHandle,
    notifier: Arc<dyn Notifier>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, notifier: Arc<dyn Notifier>) -> Self {
        Self { engine, notifier }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { generation, page } => {
                    roster_info!("FetchPage generation={} page={}", generation, page);
                    self.engine.fetch_page(generation, page);
                }
                Effect::Notify(notification) => {
                    self.notifier.notify(&notification);
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine event and turns it into a message.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AttemptFailed {
            generation,
            attempt,
            error,
        } => {
            roster_debug!(
                "Attempt {} of generation {} failed: {}",
                attempt,
                generation,
                error
            );
            Msg::AttemptFailed {
                generation,
                attempt,
            }
        }
        EngineEvent::PageCompleted { generation, result } => Msg::PageLoaded {
            generation,
            outcome: match result {
                Ok(users) => PageOutcome::Loaded(users),
                Err(error) => {
                    roster_warn!("Fetch generation={} gave up: {}", generation, error);
                    PageOutcome::Failed
                }
            },
        },
    }
}
