use crate::account::application::domain::entities::{User, UserId};

/// Users keyed by id.
pub trait UsersCache: Send + Sync {
    /// Replaces the entry for `user.user_id`; other entries are untouched.
    fn cache_user(&self, user: User);

    fn get_user(&self, user_id: &UserId) -> Option<User>;
}
