use std::sync::Arc;

use tracing::info;

use crate::account::adapter::outgoing::http::{
    AccountApiClient, HttpEndpointConfig, HttpEndpointError, HttpLoginEndpoint,
    HttpUpdateUsernameEndpoint, HttpUserProfileEndpoint,
};
use crate::account::adapter::outgoing::{
    InMemoryAuthTokenCache, InMemoryUserProfilesCache, InMemoryUsersCache, InProcessEventBus,
    LoggingEventSubscriber,
};
use crate::account::application::services::{
    FetchUserProfileService, LoginService, UpdateUsernameService,
};
use crate::account::application::AccountUseCases;

/// Production wiring: HTTP endpoints, in-memory caches and an in-process event bus.
///
/// The caches and the bus are exposed so callers can read state back and
/// subscribe their own listeners.
#[derive(Clone)]
pub struct AccountApp {
    pub use_cases: AccountUseCases,
    pub auth_token_cache: Arc<InMemoryAuthTokenCache>,
    pub users_cache: Arc<InMemoryUsersCache>,
    pub user_profiles_cache: Arc<InMemoryUserProfilesCache>,
    pub event_bus: Arc<InProcessEventBus>,
}

impl AccountApp {
    pub fn from_env() -> Result<Self, HttpEndpointError> {
        let config = HttpEndpointConfig::from_env()?;
        Self::with_config(&config)
    }

    pub fn with_config(config: &HttpEndpointConfig) -> Result<Self, HttpEndpointError> {
        let client = AccountApiClient::new(config)?;

        let auth_token_cache = Arc::new(InMemoryAuthTokenCache::new());
        let users_cache = Arc::new(InMemoryUsersCache::new());
        let user_profiles_cache = Arc::new(InMemoryUserProfilesCache::new());

        let event_bus = Arc::new(InProcessEventBus::new());
        event_bus.subscribe(Arc::new(LoggingEventSubscriber));

        let login = LoginService::new(
            HttpLoginEndpoint::new(client.clone()),
            auth_token_cache.clone(),
            event_bus.clone(),
        );
        let update_username = UpdateUsernameService::new(
            HttpUpdateUsernameEndpoint::new(client.clone()),
            users_cache.clone(),
            event_bus.clone(),
        );
        let fetch_user_profile = FetchUserProfileService::new(
            HttpUserProfileEndpoint::new(client),
            user_profiles_cache.clone(),
            event_bus.clone(),
        );

        info!(base_url = %config.base_url, timeout = ?config.timeout, "Account use cases wired");

        Ok(Self {
            use_cases: AccountUseCases {
                login: Arc::new(login),
                update_username: Arc::new(update_username),
                fetch_user_profile: Arc::new(fetch_user_profile),
            },
            auth_token_cache,
            users_cache,
            user_profiles_cache,
            event_bus,
        })
    }
}
