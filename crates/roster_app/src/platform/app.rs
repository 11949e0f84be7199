use std::sync::Arc;
use std::time::{Duration, Instant};

use roster_core::{update, AppState, AppViewModel, Msg, ScrollMetrics};
use roster_engine::{EngineError, EngineHandle, RandomTagPicker, TagPicker};
use roster_logging::{roster_info, roster_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::notify::{LogNotifier, Notifier};

/// Height of one user row in the headless layout.
pub const ROW_HEIGHT: u32 = 72;
pub const VIEWPORT_HEIGHT: u32 = 640;

const FETCH_WAIT: Duration = Duration::from_secs(30);

/// Owns the app state and is the only place it is mutated.
pub struct Session {
    state: AppState,
    runner: EffectRunner,
}

impl Session {
    pub fn new(config: &AppConfig, notifier: Arc<dyn Notifier>) -> Result<Self, EngineError> {
        let tags: Arc<dyn TagPicker> = match config.tag_seed {
            Some(seed) => Arc::new(RandomTagPicker::seeded(seed)),
            None => Arc::new(RandomTagPicker::from_entropy()),
        };
        let engine = EngineHandle::new(config.fetch_settings(), tags)?;
        Ok(Self::with_runner(EffectRunner::new(engine, notifier)))
    }

    pub fn with_runner(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    /// Applies `msg` and runs its effects. Returns whether the view changed.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
        self.state.consume_dirty()
    }

    /// Feeds engine events back in until no fetch is in flight. Returns
    /// `false` if `timeout` ran out first.
    pub fn wait_until_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.state.is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            if let Some(msg) = self.runner.next_msg(remaining) {
                self.dispatch(msg);
            }
        }
        true
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }
}

/// Scroll geometry of a list of `view.items` rows scrolled all the way down.
pub fn scroll_to_bottom(view: &AppViewModel) -> ScrollMetrics {
    let content_height = ROW_HEIGHT.saturating_mul(view.items.len() as u32);
    ScrollMetrics {
        offset: content_height.saturating_sub(VIEWPORT_HEIGHT),
        viewport_height: VIEWPORT_HEIGHT,
        content_height,
    }
}

/// Headless walk through the home list: mount, scroll to the end once,
/// favorite the first user, refresh.
pub fn run_app(config: &AppConfig) -> anyhow::Result<()> {
    let mut session = Session::new(config, Arc::new(LogNotifier))?;

    session.dispatch(Msg::Mounted);
    settle(&mut session, "mount");

    let metrics = scroll_to_bottom(&session.view());
    session.dispatch(Msg::Scrolled(metrics));
    settle(&mut session, "scroll");

    if let Some(first) = session.view().items.first() {
        session.dispatch(Msg::FavoriteAdded(first.user.clone()));
    }

    session.dispatch(Msg::RefreshClicked);
    settle(&mut session, "refresh");

    let view = session.view();
    roster_info!(
        "Done: {} users listed, {} favorites, next page {}",
        view.items.len(),
        view.favorites.len(),
        view.page
    );
    Ok(())
}

fn settle(session: &mut Session, step: &str) {
    if !session.wait_until_idle(FETCH_WAIT) {
        roster_warn!("{}: fetch still running after {:?}", step, FETCH_WAIT);
        return;
    }
    let view = session.view();
    roster_info!(
        "{}: {} users, page={} has_more={} error={}",
        step,
        view.items.len(),
        view.page,
        view.has_more,
        view.error
    );
    for row in &view.items {
        roster_info!(
            "  {} {} ({}) #{}",
            if row.is_favorite { "★" } else { "☆" },
            row.user.name,
            row.user.location,
            row.user.tags.join(" #")
        );
    }
}
