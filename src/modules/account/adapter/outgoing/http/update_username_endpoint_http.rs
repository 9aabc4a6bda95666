// src/modules/account/adapter/outgoing/http/update_username_endpoint_http.rs

use serde::Serialize;

use crate::account::application::{
    domain::entities::UserId,
    ports::outgoing::{EndpointOutcome, NetworkError, UpdateUsernameEndpoint, UpdateUsernamePayload},
};

use super::account_api_client::AccountApiClient;

#[derive(Serialize)]
struct UpdateUsernameBody<'a> {
    username: &'a str,
}

/// `PUT {base}/users/{userId}/username`
#[derive(Debug, Clone)]
pub struct HttpUpdateUsernameEndpoint {
    client: AccountApiClient,
}

impl HttpUpdateUsernameEndpoint {
    pub fn new(client: AccountApiClient) -> Self {
        Self { client }
    }
}

impl UpdateUsernameEndpoint for HttpUpdateUsernameEndpoint {
    fn update_username(
        &self,
        user_id: &UserId,
        username: &str,
    ) -> Result<EndpointOutcome<UpdateUsernamePayload>, NetworkError> {
        self.client.put(
            &["users", user_id.value(), "username"],
            &UpdateUsernameBody { username },
        )
    }
}
