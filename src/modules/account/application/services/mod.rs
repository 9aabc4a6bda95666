mod fetch_user_profile_service;
mod login_service;
mod update_username_service;

pub use fetch_user_profile_service::FetchUserProfileService;
pub use login_service::LoginService;
pub use update_username_service::UpdateUsernameService;
