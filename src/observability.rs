//! Logging setup
//!
//! Installs a `tracing` fmt subscriber. `RUST_LOG` wins over the configured
//! filter when set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// Returns an error if a subscriber is already installed or `default_filter`
/// is not a valid directive.
pub fn init_tracing(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
