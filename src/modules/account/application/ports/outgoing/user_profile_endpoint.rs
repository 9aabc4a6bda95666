use serde::Deserialize;

use crate::account::application::domain::entities::UserId;

use super::endpoint::{EndpointOutcome, NetworkError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfilePayload {
    pub user_id: UserId,
    pub full_name: String,
    pub image_url: String,
}

pub trait UserProfileEndpoint: Send + Sync {
    fn get_user_profile(
        &self,
        user_id: &UserId,
    ) -> Result<EndpointOutcome<UserProfilePayload>, NetworkError>;
}
