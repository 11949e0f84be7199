use roster_logging::{roster_debug, roster_info, roster_warn};

use crate::view_model::{AppViewModel, UserRowView};
use crate::{FavoritesSet, PageOutcome, UserRecord};

/// Tag attached to every started fetch. Results carrying an older tag are stale.
pub type Generation = u64;

/// Cursor of the very first page.
pub const FIRST_PAGE: u32 = 1;

/// How close to the end of the content a scroll must get to load the next page.
pub const SCROLL_THRESHOLD: u32 = 100;

/// The single fetch allowed to be in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InFlight {
    pub generation: Generation,
    pub page: u32,
    pub is_refresh: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FetchCompletion {
    Appended { count: usize },
    Replaced { count: usize },
    EndOfData,
    Failed,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    items: Vec<UserRecord>,
    page: u32,
    error: bool,
    has_more: bool,
    in_flight: Option<InFlight>,
    last_generation: Generation,
    failed_attempts: u32,
    favorites: FavoritesSet,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: FIRST_PAGE,
            error: false,
            has_more: true,
            in_flight: None,
            last_generation: 0,
            failed_attempts: 0,
            favorites: FavoritesSet::default(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let items = self
            .items
            .iter()
            .map(|user| UserRowView {
                user: user.clone(),
                is_favorite: self.favorites.contains(&user.id),
            })
            .collect();

        AppViewModel {
            items,
            page: self.page,
            loading: self.is_loading(),
            error: self.error,
            has_more: self.has_more,
            show_end_of_list: !self.has_more && !self.items.is_empty(),
            failed_attempts: self.failed_attempts,
            favorites: self.favorites.iter().cloned().collect(),
            dirty: self.dirty,
        }
    }

    pub fn items(&self) -> &[UserRecord] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn in_flight(&self) -> Option<InFlight> {
        self.in_flight
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Claims the in-flight slot. `None` when a fetch is already running, or
    /// when paginating past the end of the data.
    pub(crate) fn begin_fetch(&mut self, is_refresh: bool) -> Option<InFlight> {
        if self.in_flight.is_some() || (!is_refresh && !self.has_more) {
            return None;
        }

        self.last_generation += 1;
        let in_flight = InFlight {
            generation: self.last_generation,
            page: if is_refresh { FIRST_PAGE } else { self.page },
            is_refresh,
        };
        roster_info!(
            "Fetch start generation={} page={} refresh={}",
            in_flight.generation,
            in_flight.page,
            in_flight.is_refresh
        );

        self.in_flight = Some(in_flight);
        self.error = false;
        self.failed_attempts = 0;
        self.dirty = true;
        Some(in_flight)
    }

    pub(crate) fn force_has_more(&mut self) {
        if !self.has_more {
            self.has_more = true;
            self.dirty = true;
        }
    }

    pub(crate) fn record_failed_attempt(&mut self, generation: Generation, attempt: u32) {
        if !self.is_current(generation) {
            roster_debug!(
                "Ignoring attempt failure for stale generation={} attempt={}",
                generation,
                attempt
            );
            return;
        }
        self.failed_attempts = self.failed_attempts.max(attempt);
        self.dirty = true;
    }

    pub(crate) fn complete_fetch(
        &mut self,
        generation: Generation,
        outcome: PageOutcome,
    ) -> FetchCompletion {
        let Some(in_flight) = self.in_flight.filter(|f| f.generation == generation) else {
            roster_debug!("Discarding stale page result generation={}", generation);
            return FetchCompletion::Stale;
        };
        self.in_flight = None;
        self.dirty = true;

        match outcome {
            PageOutcome::Loaded(users) if users.is_empty() => {
                roster_info!("Page {} is empty; end of data", in_flight.page);
                self.has_more = false;
                FetchCompletion::EndOfData
            }
            PageOutcome::Loaded(users) => {
                let count = users.len();
                if in_flight.is_refresh {
                    self.items = users;
                    self.page = FIRST_PAGE + 1;
                    self.has_more = true;
                    FetchCompletion::Replaced { count }
                } else {
                    self.items.extend(users);
                    self.page += 1;
                    FetchCompletion::Appended { count }
                }
            }
            PageOutcome::Failed => {
                roster_warn!(
                    "Fetch generation={} page={} failed after retries",
                    generation,
                    in_flight.page
                );
                self.error = true;
                FetchCompletion::Failed
            }
        }
    }

    pub(crate) fn add_favorite(&mut self, user: UserRecord) {
        self.favorites.add(user);
        self.dirty = true;
    }

    pub(crate) fn remove_favorite(&mut self, id: &str) {
        if self.favorites.remove(id) {
            self.dirty = true;
        }
    }

    fn is_current(&self, generation: Generation) -> bool {
        self.in_flight
            .is_some_and(|in_flight| in_flight.generation == generation)
    }
}
