use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directives when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,account_sync=info";

/// Installs the global fmt subscriber, filtered by `RUST_LOG` or `default_filter`.
///
/// Fails if a global subscriber is already set, so embedding applications keep theirs.
pub fn init_tracing(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
