use std::env;
use std::time::Duration;

use reqwest::Url;

pub const BASE_URL_VAR: &str = "ACCOUNT_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "ACCOUNT_API_TIMEOUT_SECS";
pub const USE_SYSTEM_PROXY_VAR: &str = "ACCOUNT_API_USE_SYSTEM_PROXY";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is not a usable base URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },

    #[error("{var} must be a whole number of seconds between 1 and {max}, got {value:?}")]
    InvalidTimeout {
        var: &'static str,
        max: u64,
        value: String,
    },

    #[error("{var} must be one of true, false, 1 or 0, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

/// Where the account API lives and how long a single call may block.
#[derive(Debug, Clone)]
pub struct HttpEndpointConfig {
    pub base_url: Url,
    /// Covers the whole exchange; expiry surfaces as a network error.
    pub timeout: Duration,
    pub use_system_proxy: bool,
}

impl HttpEndpointConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Self::parse_base_url(base_url)?,
            timeout,
            use_system_proxy: true,
        })
    }

    pub fn without_system_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    /// Load from the process environment.
    ///
    /// `.env.{RUST_ENV}` is tried first, then `.env`; variables already set in
    /// the environment win over both files.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{rust_env}")).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR).ok_or(ConfigError::Missing(BASE_URL_VAR))?;
        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => Self::parse_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        let use_system_proxy = match lookup(USE_SYSTEM_PROXY_VAR) {
            Some(raw) => Self::parse_flag(USE_SYSTEM_PROXY_VAR, &raw)?,
            None => true,
        };

        Ok(Self {
            base_url: Self::parse_base_url(&base_url)?,
            timeout,
            use_system_proxy,
        })
    }

    fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            var: BASE_URL_VAR,
            reason,
        };

        let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }

        Ok(url)
    }

    fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
        let invalid = || ConfigError::InvalidTimeout {
            var: TIMEOUT_VAR,
            max: MAX_TIMEOUT_SECS,
            value: raw.to_string(),
        };

        let secs = raw.trim().parse::<u64>().map_err(|_| invalid())?;
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(invalid());
        }

        Ok(Duration::from_secs(secs))
    }

    fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ConfigError::InvalidFlag {
                var,
                value: raw.to_string(),
            }),
        }
    }
}
