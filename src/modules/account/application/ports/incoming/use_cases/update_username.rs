use crate::account::application::domain::entities::UserId;

use super::UseCaseResult;

#[derive(Debug, Clone)]
pub struct UpdateUsernameRequest {
    pub user_id: UserId,
    pub username: String,
}

impl UpdateUsernameRequest {
    pub fn new(user_id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
        }
    }
}

pub trait UpdateUsernameUseCase: Send + Sync {
    fn execute(&self, request: UpdateUsernameRequest) -> UseCaseResult;
}
