use std::fmt;

/// Answer of a remote account endpoint that was actually reached.
///
/// The payload only exists on `Success`; the error tags carry nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointOutcome<T> {
    Success(T),
    GeneralError,
    AuthError,
    ServerError,
}

impl<T> EndpointOutcome<T> {
    pub fn status(&self) -> EndpointStatus {
        match self {
            EndpointOutcome::Success(_) => EndpointStatus::Success,
            EndpointOutcome::GeneralError => EndpointStatus::GeneralError,
            EndpointOutcome::AuthError => EndpointStatus::AuthError,
            EndpointOutcome::ServerError => EndpointStatus::ServerError,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, EndpointOutcome::Success(_))
    }

    /// Builds the error outcome for a non-success status.
    ///
    /// Returns `None` for `EndpointStatus::Success`, which needs a payload.
    pub fn from_error_status(status: EndpointStatus) -> Option<Self> {
        match status {
            EndpointStatus::Success => None,
            EndpointStatus::GeneralError => Some(EndpointOutcome::GeneralError),
            EndpointStatus::AuthError => Some(EndpointOutcome::AuthError),
            EndpointStatus::ServerError => Some(EndpointOutcome::ServerError),
        }
    }
}

/// Payload-free tag of an `EndpointOutcome`, used for logging and status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointStatus {
    Success,
    GeneralError,
    AuthError,
    ServerError,
}

impl fmt::Display for EndpointStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointStatus::Success => write!(f, "success"),
            EndpointStatus::GeneralError => write!(f, "general error"),
            EndpointStatus::AuthError => write!(f, "auth error"),
            EndpointStatus::ServerError => write!(f, "server error"),
        }
    }
}

/// The endpoint could not be reached or the exchange broke off mid-way.
///
/// Distinct from the error tags of `EndpointOutcome`: nothing was classified
/// by the server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out: {0}")]
    Timeout(String),
}
