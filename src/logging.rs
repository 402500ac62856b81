//! Logging bootstrap.
//!
//! Installs a `tracing-subscriber` fmt subscriber that writes through any
//! [`MakeWriter`]. Hosts pick the sink: the browser frontend forwards lines to
//! the developer console, native hosts can use stderr.

use thiserror::Error;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter {filter:?}: {error}")]
    InvalidFilter { filter: String, error: String },

    #[error("Logging already initialized")]
    AlreadyInitialized,
}

/// Build the filter for `config.level`.
///
/// Accepts a bare level (`debug`) or full directives
/// (`analytics_portal=debug,warn`).
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(&config.level).map_err(|e| LoggingError::InvalidFilter {
        filter: config.level.clone(),
        error: e.to_string(),
    })
}

/// Install the global subscriber. Fails instead of panicking when one is
/// already set.
pub fn init<W>(config: &LoggingConfig, writer: W) -> Result<(), LoggingError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .without_time()
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    tracing::debug!(level = %config.level, "Logging initialized");
    Ok(())
}
