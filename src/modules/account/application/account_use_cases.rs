use std::sync::Arc;

use crate::account::application::ports::incoming::use_cases::{
    FetchUserProfileUseCase, LoginUseCase, UpdateUsernameUseCase,
};

#[derive(Clone)]
pub struct AccountUseCases {
    pub login: Arc<dyn LoginUseCase + Send + Sync>,
    pub update_username: Arc<dyn UpdateUsernameUseCase + Send + Sync>,
    pub fetch_user_profile: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
}
