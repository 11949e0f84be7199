use roster_core::UserRecord;

use crate::decode::RawUser;
use crate::tags::TagPicker;

/// Flattens a raw API record into a [`UserRecord`] with one random tag.
pub fn to_user_record(raw: RawUser, tags: &dyn TagPicker) -> UserRecord {
    UserRecord {
        id: raw.login.uuid,
        name: format!("{} {}", raw.name.first, raw.name.last),
        profile_picture: raw.picture.medium,
        location: format!("{}, {}", raw.location.city, raw.location.country),
        tags: vec![tags.pick().to_string()],
    }
}
