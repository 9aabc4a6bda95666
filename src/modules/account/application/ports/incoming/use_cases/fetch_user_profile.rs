use crate::account::application::domain::entities::UserId;

use super::UseCaseResult;

#[derive(Debug, Clone)]
pub struct FetchUserProfileRequest {
    pub user_id: UserId,
}

impl FetchUserProfileRequest {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

pub trait FetchUserProfileUseCase: Send + Sync {
    /// On success the profile is only reachable through the profiles cache.
    fn execute(&self, request: FetchUserProfileRequest) -> UseCaseResult;
}
