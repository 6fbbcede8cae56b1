//! Logging setup
//!
//! `RUST_LOG` takes precedence; otherwise the configured level applies to
//! this crate and HTTP request tracing stays at `info`.
//!
//! Events go to stderr so that stdout carries only command output, which
//! keeps `stroke-dashboard-cli render --format json` parseable.

use crate::config::{LogFormat, LoggingConfig};
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Filter directives used when `RUST_LOG` is unset
pub fn default_directives(level: &str) -> String {
    format!("stroke_dashboard={},tower_http=info", level)
}

/// Build a subscriber writing formatted events to `writer`
pub fn build_subscriber<W>(
    filter: EnvFilter,
    format: LogFormat,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => Box::new(registry.with(fmt::layer().json().with_writer(writer))),
        LogFormat::Pretty => Box::new(registry.with(fmt::layer().with_writer(writer))),
    }
}

/// Install the global subscriber, writing to stderr
pub fn init_logging(config: &LoggingConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(&config.level).into());

    build_subscriber(filter, config.format, std::io::stderr).try_init()
}
