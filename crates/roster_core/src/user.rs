/// Tags a freshly fetched user can be labelled with. One is picked per user.
pub const TAG_POOL: [&str; 6] = ["Music", "Travel", "Photography", "Hiking", "Coding", "Gaming"];

/// A user profile as shown in the home list and the favorites list.
///
/// `id` comes from the data source and stays the same when the same user is
/// fetched twice, so it is the key for favorites and row identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub profile_picture: String,
    pub location: String,
    pub tags: Vec<String>,
}
