use crate::account::application::domain::entities::AuthToken;

/// Single-slot store for the current session token.
pub trait AuthTokenCache: Send + Sync {
    /// Replaces whatever token was cached before.
    fn cache_auth_token(&self, auth_token: AuthToken);

    fn get_auth_token(&self) -> Option<AuthToken>;
}
