use serde::Deserialize;

use crate::account::application::domain::entities::AuthToken;

use super::endpoint::{EndpointOutcome, NetworkError};

/// Body of a successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub auth_token: AuthToken,
}

pub trait LoginEndpoint: Send + Sync {
    /// Exchanges credentials for an auth token. Blocks until the server answers.
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<EndpointOutcome<LoginPayload>, NetworkError>;
}
