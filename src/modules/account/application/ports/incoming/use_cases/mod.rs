mod fetch_user_profile;
mod login;
mod update_username;

pub use fetch_user_profile::{FetchUserProfileRequest, FetchUserProfileUseCase};
pub use login::{LoginRequest, LoginUseCase};
pub use update_username::{UpdateUsernameRequest, UpdateUsernameUseCase};

/// What a use case reports back to its caller.
///
/// Carries no data: anything fetched is only reachable through the caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCaseResult {
    Success,
    /// The endpoint answered with a general, auth or server error.
    Failure,
    /// The endpoint was never reached or the exchange broke off.
    NetworkError,
}
