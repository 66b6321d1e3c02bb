//! # Logging
//!
//! Installs the tracing subscriber before anything else runs.
//!
//! ```text
//! ARIARY_LOG (or "warn") ──► subscriber installed ──► CliConfig loaded
//!                                    ▲                       │
//!                                    └── filter reloaded ◄───┘
//!                                        from logging.filter
//! ```
//!
//! The config loader logs while it reads the file and the environment, so
//! the subscriber has to exist first; the configured filter replaces the
//! bootstrap one afterwards.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::config::LOG_ENV;
use crate::error::{CliError, CliResult, ConfigError};

/// Filter used until the configuration is loaded.
pub const BOOTSTRAP_FILTER: &str = "warn";

/// Handle for swapping the active filter.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Bootstrap filter: `ARIARY_LOG` when it parses, else [`BOOTSTRAP_FILTER`].
pub fn bootstrap_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(BOOTSTRAP_FILTER))
}

/// Builds the subscriber and the handle to its filter.
pub fn build_subscriber<W>(
    filter: EnvFilter,
    writer: W,
) -> (impl Subscriber + Send + Sync + 'static, FilterHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_target(true));

    (subscriber, handle)
}

/// Installs the global subscriber, logging to stderr so stdout stays pipeable.
pub fn init() -> FilterHandle {
    let (subscriber, handle) = build_subscriber(bootstrap_filter(), std::io::stderr);
    subscriber.init();
    handle
}

/// Replaces the active filter with a configured directive.
pub fn apply_filter(handle: &FilterHandle, directive: &str) -> CliResult<()> {
    let filter = EnvFilter::try_new(directive).map_err(|e| {
        ConfigError::InvalidValue(format!("Invalid log filter '{}': {}", directive, e))
    })?;

    handle
        .reload(filter)
        .map_err(|e| CliError::Logging(e.to_string()))
}
