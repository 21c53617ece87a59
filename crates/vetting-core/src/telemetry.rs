//! Tracing initialisation for vetting binaries and test harnesses.
//!
//! Call [`init_tracing`] once at program start. The global subscriber
//! can only be installed once per process, so repeated calls are
//! silently ignored.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    Text,
    /// Newline-delimited JSON, for log aggregation.
    Json,
}

/// Install the global tracing subscriber.
///
/// `level` is the default verbosity when `RUST_LOG` is not set; when it
/// is set, the environment filter wins. Safe to call multiple times.
pub fn init_tracing(format: LogFormat, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_target(false).json())
                .try_init()
                .ok();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_target(false))
                .try_init()
                .ok();
        }
    }
}
