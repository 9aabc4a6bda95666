use crate::account::application::{
    domain::entities::UserId,
    ports::outgoing::{EndpointOutcome, NetworkError, UserProfileEndpoint, UserProfilePayload},
};

use super::account_api_client::AccountApiClient;

/// `GET {base}/users/{userId}/profile`
#[derive(Debug, Clone)]
pub struct HttpUserProfileEndpoint {
    client: AccountApiClient,
}

impl HttpUserProfileEndpoint {
    pub fn new(client: AccountApiClient) -> Self {
        Self { client }
    }
}

impl UserProfileEndpoint for HttpUserProfileEndpoint {
    fn get_user_profile(
        &self,
        user_id: &UserId,
    ) -> Result<EndpointOutcome<UserProfilePayload>, NetworkError> {
        self.client.get(&["users", user_id.value(), "profile"])
    }
}
