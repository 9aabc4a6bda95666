//! Blocking HTTP adapters for the remote account API.

mod account_api_client;
mod http_config;
mod login_endpoint_http;
mod update_username_endpoint_http;
mod user_profile_endpoint_http;

#[cfg(test)]
pub(crate) mod test_server;

pub use account_api_client::{categorize_status, AccountApiClient, HttpEndpointError};
pub use http_config::{
    ConfigError, HttpEndpointConfig, BASE_URL_VAR, TIMEOUT_VAR, USE_SYSTEM_PROXY_VAR,
};
pub use login_endpoint_http::HttpLoginEndpoint;
pub use update_username_endpoint_http::HttpUpdateUsernameEndpoint;
pub use user_profile_endpoint_http::HttpUserProfileEndpoint;
