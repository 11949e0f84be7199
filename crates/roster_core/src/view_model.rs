use crate::UserRecord;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub items: Vec<UserRowView>,
    pub page: u32,
    pub loading: bool,
    pub error: bool,
    pub has_more: bool,
    /// "No more users" footer: data exhausted and something is on screen.
    pub show_end_of_list: bool,
    pub failed_attempts: u32,
    pub favorites: Vec<UserRecord>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRowView {
    pub user: UserRecord,
    /// Disables the add action and flips the star.
    pub is_favorite: bool,
}
