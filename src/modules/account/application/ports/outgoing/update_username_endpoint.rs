use serde::Deserialize;

use crate::account::application::domain::entities::UserId;

use super::endpoint::{EndpointOutcome, NetworkError};

/// The account as stored remotely after the rename.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUsernamePayload {
    pub user_id: UserId,
    pub username: String,
}

pub trait UpdateUsernameEndpoint: Send + Sync {
    fn update_username(
        &self,
        user_id: &UserId,
        username: &str,
    ) -> Result<EndpointOutcome<UpdateUsernamePayload>, NetworkError>;
}
