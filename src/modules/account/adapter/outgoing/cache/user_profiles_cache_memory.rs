use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::account::application::{
    domain::entities::{UserId, UserProfile},
    ports::outgoing::UserProfilesCache,
};

#[derive(Debug, Default)]
pub struct InMemoryUserProfilesCache {
    profiles: RwLock<HashMap<UserId, UserProfile>>,
}

impl InMemoryUserProfilesCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserProfilesCache for InMemoryUserProfilesCache {
    fn cache_user_profile(&self, profile: UserProfile) {
        let mut profiles = self
            .profiles
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        profiles.remove(&profile.user_id);
        profiles.insert(profile.user_id.clone(), profile);
    }

    fn get_user_profile(&self, user_id: &UserId) -> Option<UserProfile> {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
    }
}
