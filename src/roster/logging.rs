//! Logging bootstrap for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! whoever embeds it. The CLI calls [`init_logging`] once at startup, which
//! writes compact lines to stderr so they never mix with rendered lists.
//!
//! Filter precedence: `ROSTER_LOG` (any `EnvFilter` directive string), then
//! `debug` when verbose, then `warn`.

use crate::error::{Result, RosterError};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ROSTER_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "roster=debug"
    } else {
        "warn"
    }
}

fn build_filter(env_value: Option<&str>, verbose: bool) -> Result<EnvFilter> {
    match env_value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| RosterError::Config(format!("invalid {LOG_ENV} value: {e}"))),
        None => Ok(EnvFilter::new(default_directive(verbose))),
    }
}

/// Installs the global subscriber. Fails if `ROSTER_LOG` is malformed or a
/// subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = build_filter(env_value.as_deref(), verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| RosterError::Config(format!("failed to start logger: {e}")))?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Ok(())
}
