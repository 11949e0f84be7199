use roster_logging::roster_debug;

use crate::state::FetchCompletion;
use crate::{AppState, Effect, Msg, Notification, SCROLL_THRESHOLD};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => fetch(&mut state, false),
        Msg::Scrolled(metrics) => {
            if metrics.is_near_bottom(SCROLL_THRESHOLD) && !state.is_loading() && state.has_more()
            {
                fetch(&mut state, false)
            } else {
                Vec::new()
            }
        }
        Msg::RefreshClicked => {
            state.force_has_more();
            fetch(&mut state, true)
        }
        Msg::AttemptFailed {
            generation,
            attempt,
        } => {
            state.record_failed_attempt(generation, attempt);
            Vec::new()
        }
        Msg::PageLoaded {
            generation,
            outcome,
        } => match state.complete_fetch(generation, outcome) {
            FetchCompletion::Failed => vec![Effect::Notify(Notification::LoadFailed)],
            FetchCompletion::Appended { count } => {
                roster_debug!("Appended {} users (generation={})", count, generation);
                Vec::new()
            }
            FetchCompletion::Replaced { count } => {
                roster_debug!("Replaced list with {} users (generation={})", count, generation);
                Vec::new()
            }
            FetchCompletion::EndOfData | FetchCompletion::Stale => Vec::new(),
        },
        Msg::FavoriteAdded(user) => {
            let name = user.name.clone();
            state.add_favorite(user);
            vec![Effect::Notify(Notification::FavoriteAdded { name })]
        }
        Msg::FavoriteRemoved { id } => {
            state.remove_favorite(&id);
            Vec::new()
        }
    };

    (state, effects)
}

fn fetch(state: &mut AppState, is_refresh: bool) -> Vec<Effect> {
    match state.begin_fetch(is_refresh) {
        Some(in_flight) => vec![Effect::FetchPage {
            generation: in_flight.generation,
            page: in_flight.page,
        }],
        None => {
            roster_debug!(
                "Fetch skipped refresh={} loading={} has_more={}",
                is_refresh,
                state.is_loading(),
                state.has_more()
            );
            Vec::new()
        }
    }
}
