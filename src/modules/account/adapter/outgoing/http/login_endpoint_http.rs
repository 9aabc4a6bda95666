// src/modules/account/adapter/outgoing/http/login_endpoint_http.rs

use serde::Serialize;

use crate::account::application::ports::outgoing::{
    EndpointOutcome, LoginEndpoint, LoginPayload, NetworkError,
};

use super::account_api_client::AccountApiClient;

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

/// `POST {base}/login`
#[derive(Debug, Clone)]
pub struct HttpLoginEndpoint {
    client: AccountApiClient,
}

impl HttpLoginEndpoint {
    pub fn new(client: AccountApiClient) -> Self {
        Self { client }
    }
}

impl LoginEndpoint for HttpLoginEndpoint {
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<EndpointOutcome<LoginPayload>, NetworkError> {
        self.client
            .post(&["login"], &LoginBody { username, password })
    }
}
