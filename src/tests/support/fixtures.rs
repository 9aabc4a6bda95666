use crate::account::application::domain::entities::{AuthToken, UserId};
use crate::account::application::ports::outgoing::{
    EndpointOutcome, LoginPayload, UpdateUsernamePayload, UserProfilePayload,
};

use super::stubs::EndpointResult;

pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const AUTH_TOKEN: &str = "authToken";
pub const USER_ID: &str = "userId";
pub const FULL_NAME: &str = "fullName";
pub const IMAGE_URL: &str = "imageUrl";

pub fn login_success() -> EndpointResult<LoginPayload> {
    Ok(EndpointOutcome::Success(LoginPayload {
        auth_token: AuthToken::new(AUTH_TOKEN),
    }))
}

pub fn update_username_success() -> EndpointResult<UpdateUsernamePayload> {
    Ok(EndpointOutcome::Success(UpdateUsernamePayload {
        user_id: UserId::new(USER_ID),
        username: USERNAME.to_string(),
    }))
}

pub fn user_profile_success() -> EndpointResult<UserProfilePayload> {
    Ok(EndpointOutcome::Success(UserProfilePayload {
        user_id: UserId::new(USER_ID),
        full_name: FULL_NAME.to_string(),
        image_url: IMAGE_URL.to_string(),
    }))
}
