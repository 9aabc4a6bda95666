use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::account::application::{
    domain::entities::{User, UserId},
    ports::outgoing::UsersCache,
};

#[derive(Debug, Default)]
pub struct InMemoryUsersCache {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUsersCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UsersCache for InMemoryUsersCache {
    fn cache_user(&self, user: User) {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        users.remove(&user.user_id);
        users.insert(user.user_id.clone(), user);
    }

    fn get_user(&self, user_id: &UserId) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
    }
}
