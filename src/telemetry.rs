//! Telemetry
//!
//! Installs the process-wide tracing subscriber that [`TracingSink`]
//! records end up in.
//!
//! [`TracingSink`]: crate::response::TracingSink

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::Config;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over [`Config::log_filter`]. Returns an error
/// if a global subscriber is already installed.
pub fn init_tracing(config: &Config) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    }
}
