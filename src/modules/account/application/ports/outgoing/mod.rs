pub mod auth_token_cache;
pub mod endpoint;
pub mod event_bus_poster;
pub mod login_endpoint;
pub mod update_username_endpoint;
pub mod user_profile_endpoint;
pub mod user_profiles_cache;
pub mod users_cache;

pub use auth_token_cache::AuthTokenCache;
pub use endpoint::{EndpointOutcome, EndpointStatus, NetworkError};
pub use event_bus_poster::EventBusPoster;
pub use login_endpoint::{LoginEndpoint, LoginPayload};
pub use update_username_endpoint::{UpdateUsernameEndpoint, UpdateUsernamePayload};
pub use user_profile_endpoint::{UserProfileEndpoint, UserProfilePayload};
pub use user_profiles_cache::UserProfilesCache;
pub use users_cache::UsersCache;
