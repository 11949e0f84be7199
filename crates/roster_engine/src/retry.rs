use roster_core::{Generation, UserRecord};
use roster_logging::{roster_info, roster_trace, roster_warn};

use crate::convert::to_user_record;
use crate::decode::decode_page;
use crate::fetch::{EventSink, Fetcher};
use crate::tags::TagPicker;
use crate::{EngineEvent, FailureKind, FetchError};

/// Fetches and decodes `page`, retrying immediately on any failure until
/// `max_attempts` attempts have been made. Each failed attempt is reported to
/// `sink`; the error of the last one is returned.
pub async fn fetch_page_with_retry(
    fetcher: &dyn Fetcher,
    tags: &dyn TagPicker,
    sink: &dyn EventSink,
    generation: Generation,
    page: u32,
    max_attempts: u32,
) -> Result<Vec<UserRecord>, FetchError> {
    let max_attempts = max_attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        roster_trace!(
            "Page {} attempt {}/{} (generation={})",
            page,
            attempt,
            max_attempts,
            generation
        );
        match attempt_page(fetcher, page).await {
            Ok(raw_users) => {
                roster_info!(
                    "Page {} loaded with {} users (generation={} attempt={})",
                    page,
                    raw_users.len(),
                    generation,
                    attempt
                );
                return Ok(raw_users
                    .into_iter()
                    .map(|raw| to_user_record(raw, tags))
                    .collect());
            }
            Err(error) => {
                roster_warn!(
                    "Page {} attempt {}/{} failed (generation={}): {}",
                    page,
                    attempt,
                    max_attempts,
                    generation,
                    error
                );
                sink.emit(EngineEvent::AttemptFailed {
                    generation,
                    attempt,
                    error: error.clone(),
                });
                if attempt >= max_attempts {
                    return Err(error);
                }
            }
        }
    }
}

async fn attempt_page(
    fetcher: &dyn Fetcher,
    page: u32,
) -> Result<Vec<crate::decode::RawUser>, FetchError> {
    let body = fetcher.fetch_page(page).await?;
    decode_page(&body).map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
}
