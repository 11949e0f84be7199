use crate::{Generation, UserRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Home list became visible for the first time.
    Mounted,
    /// Scroll position of the home list changed.
    Scrolled(ScrollMetrics),
    /// User clicked Refresh.
    RefreshClicked,
    /// Engine reports a failed attempt; more may follow.
    AttemptFailed { generation: Generation, attempt: u32 },
    /// Engine finished a fetch, after retries if any.
    PageLoaded {
        generation: Generation,
        outcome: PageOutcome,
    },
    /// User marked a user as favorite.
    FavoriteAdded(UserRecord),
    /// User removed a favorite.
    FavoriteRemoved { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The data source answered. An empty page means the end of the data.
    Loaded(Vec<UserRecord>),
    /// Every attempt failed.
    Failed,
}

/// Scroll geometry of the home list, in whatever unit the platform uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    pub offset: u32,
    pub viewport_height: u32,
    pub content_height: u32,
}

impl ScrollMetrics {
    /// Distance between the bottom of the viewport and the end of the content.
    pub fn distance_to_bottom(&self) -> u32 {
        self.content_height
            .saturating_sub(self.offset)
            .saturating_sub(self.viewport_height)
    }

    pub fn is_near_bottom(&self, threshold: u32) -> bool {
        self.distance_to_bottom() <= threshold
    }
}
