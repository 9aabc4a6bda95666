//! Thin blocking HTTP client shared by the account endpoints.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::account::application::ports::outgoing::{EndpointOutcome, EndpointStatus, NetworkError};

use super::http_config::{ConfigError, HttpEndpointConfig};

#[derive(Debug, thiserror::Error)]
pub enum HttpEndpointError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// One pooled connection set to the account API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AccountApiClient {
    client: Client,
    base_url: Url,
}

impl AccountApiClient {
    pub fn new(config: &HttpEndpointConfig) -> Result<Self, HttpEndpointError> {
        let mut builder = Client::builder().timeout(config.timeout);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| HttpEndpointError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Appends percent-encoded path segments to the base URL.
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Config only accepts http(s) URLs, which always have path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn get<T>(&self, segments: &[&str]) -> Result<EndpointOutcome<T>, NetworkError>
    where
        T: DeserializeOwned,
    {
        self.send(self.client.get(self.url(segments)))
    }

    pub fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<EndpointOutcome<T>, NetworkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.client.post(self.url(segments)).json(body))
    }

    pub fn put<B, T>(&self, segments: &[&str], body: &B) -> Result<EndpointOutcome<T>, NetworkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.client.put(self.url(segments)).json(body))
    }

    fn send<T>(&self, request: RequestBuilder) -> Result<EndpointOutcome<T>, NetworkError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().map_err(to_network_error)?;
        let status = response.status();
        let url = response.url().clone();
        // A body that breaks off mid-read is a transport problem, not a server verdict.
        let body = response.text().map_err(to_network_error)?;

        match categorize_status(status) {
            EndpointStatus::Success => match serde_json::from_str::<T>(&body) {
                Ok(payload) => Ok(EndpointOutcome::Success(payload)),
                Err(e) => {
                    warn!(%url, status = status.as_u16(), error = %e, "Malformed success body");
                    Ok(EndpointOutcome::GeneralError)
                }
            },
            rejected => {
                debug!(%url, status = status.as_u16(), outcome = %rejected, "Account API rejected request");
                Ok(EndpointOutcome::from_error_status(rejected).unwrap_or(EndpointOutcome::GeneralError))
            }
        }
    }
}

/// Maps an HTTP status onto the endpoint outcome taxonomy.
pub fn categorize_status(status: StatusCode) -> EndpointStatus {
    match status.as_u16() {
        200..=299 => EndpointStatus::Success,
        401 | 403 => EndpointStatus::AuthError,
        500..=599 => EndpointStatus::ServerError,
        _ => EndpointStatus::GeneralError,
    }
}

fn to_network_error(error: reqwest::Error) -> NetworkError {
    if error.is_timeout() {
        NetworkError::Timeout(error.to_string())
    } else {
        NetworkError::Connection(error.to_string())
    }
}
