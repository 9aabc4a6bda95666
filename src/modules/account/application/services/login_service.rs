use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::account::application::{
    domain::events::LoggedInEvent,
    ports::{
        incoming::use_cases::{LoginRequest, LoginUseCase, UseCaseResult},
        outgoing::{AuthTokenCache, EndpointOutcome, EventBusPoster, LoginEndpoint},
    },
};

/// Logs a user in and keeps the resulting auth token in the token cache.
pub struct LoginService<E>
where
    E: LoginEndpoint,
{
    endpoint: E,
    auth_token_cache: Arc<dyn AuthTokenCache>,
    event_bus: Arc<dyn EventBusPoster>,
}

impl<E> LoginService<E>
where
    E: LoginEndpoint,
{
    pub fn new(
        endpoint: E,
        auth_token_cache: Arc<dyn AuthTokenCache>,
        event_bus: Arc<dyn EventBusPoster>,
    ) -> Self {
        Self {
            endpoint,
            auth_token_cache,
            event_bus,
        }
    }
}

impl<E> LoginUseCase for LoginService<E>
where
    E: LoginEndpoint,
{
    fn execute(&self, request: LoginRequest) -> UseCaseResult {
        debug!(username = %request.username(), "Login attempt");

        let outcome = match self.endpoint.login(request.username(), request.password()) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Login failed: endpoint unreachable");
                return UseCaseResult::NetworkError;
            }
        };

        match outcome {
            EndpointOutcome::Success(payload) => {
                self.auth_token_cache.cache_auth_token(payload.auth_token);
                self.event_bus.post_event(LoggedInEvent.into());
                info!(username = %request.username(), "User logged in");
                UseCaseResult::Success
            }
            rejected => {
                warn!(status = %rejected.status(), "Login rejected by endpoint");
                UseCaseResult::Failure
            }
        }
    }
}
