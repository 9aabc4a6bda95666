use crate::account::application::domain::entities::{UserId, UserProfile};

/// Profiles keyed by user id.
pub trait UserProfilesCache: Send + Sync {
    /// Replaces the entry for `profile.user_id`; other entries are untouched.
    fn cache_user_profile(&self, profile: UserProfile);

    fn get_user_profile(&self, user_id: &UserId) -> Option<UserProfile>;
}
