use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::account::application::{
    domain::{entities::User, events::UserDetailsChangedEvent},
    ports::{
        incoming::use_cases::{UpdateUsernameRequest, UpdateUsernameUseCase, UseCaseResult},
        outgoing::{EndpointOutcome, EventBusPoster, UpdateUsernameEndpoint, UsersCache},
    },
};

pub struct UpdateUsernameService<E>
where
    E: UpdateUsernameEndpoint,
{
    endpoint: E,
    users_cache: Arc<dyn UsersCache>,
    event_bus: Arc<dyn EventBusPoster>,
}

impl<E> UpdateUsernameService<E>
where
    E: UpdateUsernameEndpoint,
{
    pub fn new(
        endpoint: E,
        users_cache: Arc<dyn UsersCache>,
        event_bus: Arc<dyn EventBusPoster>,
    ) -> Self {
        Self {
            endpoint,
            users_cache,
            event_bus,
        }
    }
}

impl<E> UpdateUsernameUseCase for UpdateUsernameService<E>
where
    E: UpdateUsernameEndpoint,
{
    fn execute(&self, request: UpdateUsernameRequest) -> UseCaseResult {
        debug!(user_id = %request.user_id, "Username update attempt");

        let outcome = match self
            .endpoint
            .update_username(&request.user_id, &request.username)
        {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(user_id = %request.user_id, error = %e, "Username update failed: endpoint unreachable");
                return UseCaseResult::NetworkError;
            }
        };

        match outcome {
            EndpointOutcome::Success(payload) => {
                // The cache is keyed by what the server confirmed, not by what we asked for.
                let user = User::new(payload.user_id, payload.username);
                let user_id = user.user_id.clone();
                self.users_cache.cache_user(user);
                info!(user_id = %user_id, "Username updated");
                self.event_bus.post_event(UserDetailsChangedEvent { user_id }.into());
                UseCaseResult::Success
            }
            rejected => {
                warn!(
                    user_id = %request.user_id,
                    status = %rejected.status(),
                    "Username update rejected by endpoint"
                );
                UseCaseResult::Failure
            }
        }
    }
}
