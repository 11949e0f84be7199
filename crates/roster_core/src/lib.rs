//! Roster core: pure paging state machine, favorites and view-model helpers.
mod effect;
mod favorites;
mod msg;
mod state;
mod update;
mod user;
mod view_model;

pub use effect::{Effect, Notification, Severity};
pub use favorites::FavoritesSet;
pub use msg::{Msg, PageOutcome, ScrollMetrics};
pub use state::{AppState, Generation, InFlight, FIRST_PAGE, SCROLL_THRESHOLD};
pub use update::update;
pub use user::{UserRecord, TAG_POOL};
pub use view_model::{AppViewModel, UserRowView};
