use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page (with retries). The result must come back as
    /// `Msg::PageLoaded` carrying the same generation.
    FetchPage { generation: Generation, page: u32 },
    /// Show a transient notification. Fire-and-forget.
    Notify(Notification),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    FavoriteAdded { name: String },
    LoadFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Notification {
    pub fn severity(&self) -> Severity {
        match self {
            Notification::FavoriteAdded { .. } => Severity::Success,
            Notification::LoadFailed => Severity::Error,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notification::FavoriteAdded { name } => format!("{name} added to favorites!"),
            Notification::LoadFailed => {
                "Failed to load users after multiple attempts.".to_string()
            }
        }
    }
}
