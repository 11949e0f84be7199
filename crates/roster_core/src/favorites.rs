use roster_logging::{roster_debug, roster_info};

use crate::UserRecord;

/// Favorite users keyed by id, kept in the order they were first added.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoritesSet {
    users: Vec<UserRecord>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `user`. An existing entry with the same id is replaced in place.
    pub fn add(&mut self, user: UserRecord) {
        match self.users.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) => {
                roster_debug!("Favorite {} already present, replacing", user.id);
                *existing = user;
            }
            None => {
                roster_info!("Favorite added id={}", user.id);
                self.users.push(user);
            }
        }
    }

    /// Removes the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        let removed = self.users.len() != before;
        if removed {
            roster_info!("Favorite removed id={}", id);
        }
        removed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.users.iter().any(|user| user.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
