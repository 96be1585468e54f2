//! Logging setup.
//!
//! ## Environment Variables
//!
//! 1. **`NOTECANVAS_LOG`** (highest priority)
//! 2. **`RUST_LOG`** - standard tracing environment variable
//! 3. **Default** - `warn` globally, `info` for this crate
//!
//! The engine itself only emits `tracing` events; installing a subscriber is
//! the host's choice. [`init`] is a convenience for hosts without one.

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use std::env;
use tracing_subscriber::{EnvFilter, fmt, util::SubscriberInitExt};

/// Filter directives from the environment, or the default.
pub fn filter_directives() -> String {
    env::var(LOG_ENV_VAR)
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

/// Builds an [`EnvFilter`], falling back to the default on bad directives.
pub fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a global fmt subscriber.
///
/// Safe to call multiple times; returns false if a subscriber was already set.
pub fn init() -> bool {
    fmt()
        .with_env_filter(build_filter(&filter_directives()))
        .with_target(true)
        .finish()
        .try_init()
        .is_ok()
}
