// ABOUTME: Structured logging setup for the persistence core
// ABOUTME: Installs an EnvFilter-driven fmt subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging configuration.
//!
//! The core emits `tracing` events; embedding applications that already
//! install their own subscriber can skip this entirely. `RUST_LOG`
//! controls the filter, defaulting to `info`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
