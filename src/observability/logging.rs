//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config, overridable via `RUST_LOG`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Library code only emits events; the binary installs the subscriber
//! - Installed before config is loaded; the configured level is applied
//!   afterwards through a reload handle

use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Handle for changing the log level after startup.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
}

impl LogHandle {
    /// Switch to `log_level`. `RUST_LOG` still takes precedence.
    pub fn set_level(&self, log_level: &str) -> Result<(), reload::Error> {
        self.filter.reload(env_filter(log_level))
    }
}

/// Build the filter: `RUST_LOG` if set, else `subpath_alias=<level>`.
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("subpath_alias={log_level}")))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init_logging(log_level: &str) -> LogHandle {
    let (filter, handle) = reload::Layer::new(env_filter(log_level));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
    LogHandle { filter: handle }
}
