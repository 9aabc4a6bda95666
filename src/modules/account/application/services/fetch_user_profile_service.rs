use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::account::application::{
    domain::{entities::UserProfile, events::UserProfileFetchedEvent},
    ports::{
        incoming::use_cases::{FetchUserProfileRequest, FetchUserProfileUseCase, UseCaseResult},
        outgoing::{EndpointOutcome, EventBusPoster, UserProfileEndpoint, UserProfilesCache},
    },
};

pub struct FetchUserProfileService<E>
where
    E: UserProfileEndpoint,
{
    endpoint: E,
    user_profiles_cache: Arc<dyn UserProfilesCache>,
    event_bus: Arc<dyn EventBusPoster>,
}

impl<E> FetchUserProfileService<E>
where
    E: UserProfileEndpoint,
{
    pub fn new(
        endpoint: E,
        user_profiles_cache: Arc<dyn UserProfilesCache>,
        event_bus: Arc<dyn EventBusPoster>,
    ) -> Self {
        Self {
            endpoint,
            user_profiles_cache,
            event_bus,
        }
    }
}

impl<E> FetchUserProfileUseCase for FetchUserProfileService<E>
where
    E: UserProfileEndpoint,
{
    fn execute(&self, request: FetchUserProfileRequest) -> UseCaseResult {
        debug!(user_id = %request.user_id, "Fetching user profile");

        let outcome = match self.endpoint.get_user_profile(&request.user_id) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(user_id = %request.user_id, error = %e, "Profile fetch failed: endpoint unreachable");
                return UseCaseResult::NetworkError;
            }
        };

        let payload = match outcome {
            EndpointOutcome::Success(payload) => payload,
            rejected => {
                warn!(
                    user_id = %request.user_id,
                    status = %rejected.status(),
                    "Profile fetch rejected by endpoint"
                );
                return UseCaseResult::Failure;
            }
        };

        let user_id = payload.user_id.clone();
        self.user_profiles_cache.cache_user_profile(UserProfile {
            user_id: payload.user_id,
            full_name: payload.full_name,
            image_url: payload.image_url,
        });
        info!(user_id = %user_id, "User profile cached");
        self.event_bus.post_event(UserProfileFetchedEvent { user_id }.into());

        UseCaseResult::Success
    }
}
