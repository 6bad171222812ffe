//! Logging initialization.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `PANEL_LAYOUT_LOG` environment variable. Falls back to the configured
//! `[log] level` when the variable is unset or invalid.
//!
//! # Usage
//!
//! ```bash
//! # Configured level (warn by default)
//! panel-layout show
//!
//! # Debug level
//! PANEL_LAYOUT_LOG=debug panel-layout add team-load
//!
//! # Module-specific filtering
//! PANEL_LAYOUT_LOG=panel_layout::store=debug,warn panel-layout reset
//! ```

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "PANEL_LAYOUT_LOG";

/// Builds the filter: `PANEL_LAYOUT_LOG` if set and valid, else `fallback`.
pub fn filter(fallback: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback.as_directive()))
}

/// Initialize the tracing subscriber, writing to stderr so stdout stays
/// free for command output.
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init(fallback: LogLevel) {
    let _ = fmt()
        .with_env_filter(filter(fallback))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
