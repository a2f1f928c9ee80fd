//! Logging setup for the wrapper build.
//!
//! The library only emits `tracing` events. The binary installs a subscriber
//! once, at the level carried by the build configuration. The filter is built
//! from that level alone; `RUST_LOG` is not read.

use std::sync::Once;

use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Log level for build output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging output
    Silent,
    /// Only errors
    Error,
    /// Errors and warnings
    Warn,
    /// Errors, warnings, and info (default)
    #[default]
    Info,
    /// All logs including debug
    Debug,
}

impl LogLevel {
    /// Convert to tracing filter string
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter())
    }
}

/// Build the filter for a level.
///
/// Only this crate and the bundler are raised to `level`; everything else
/// stays at `warn`.
pub fn filter_for(level: LogLevel) -> EnvFilter {
    match level {
        LogLevel::Silent => EnvFilter::new("off"),
        LogLevel::Error | LogLevel::Warn => EnvFilter::new(level.as_filter()),
        LogLevel::Info | LogLevel::Debug => EnvFilter::new(format!(
            "warn,wrapper_build={lvl},build_wrapper={lvl},rolldown={lvl}",
            lvl = level.as_filter()
        )),
    }
}

/// Initialize logging with the specified level.
///
/// Installs a global subscriber writing compact lines to stderr. Only the
/// first call takes effect.
///
/// # Example
///
/// ```rust,no_run
/// use wrapper_build::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Info);
/// ```
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(filter_for(level))
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}
