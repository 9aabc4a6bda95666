use std::sync::{PoisonError, RwLock};

use crate::account::application::{
    domain::entities::AuthToken, ports::outgoing::AuthTokenCache,
};

/// Process-wide single slot for the session token.
#[derive(Debug, Default)]
pub struct InMemoryAuthTokenCache {
    slot: RwLock<Option<AuthToken>>,
}

impl InMemoryAuthTokenCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuthTokenCache for InMemoryAuthTokenCache {
    fn cache_auth_token(&self, auth_token: AuthToken) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(auth_token);
    }

    fn get_auth_token(&self) -> Option<AuthToken> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
