// ABOUTME: Startup configuration for the persistence core
// ABOUTME: Reads the store endpoint and timeout budgets from the environment with fail-fast validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration.
//!
//! The core does not own deployment configuration; it consumes an explicit
//! [`StoreConfig`] handed to the façade constructor. [`StoreConfig::from_env`]
//! is the conventional way callers build one, and it validates eagerly —
//! a missing endpoint fails at startup, never as a silent empty-string
//! default at the first query.

use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Environment variable naming the store endpoint (credentials included).
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Environment variable overriding the credential operation budget.
pub const ENV_REGISTER_TIMEOUT: &str = "DB_REGISTER_TIMEOUT_SECS";
/// Environment variable overriding the training operation budget.
pub const ENV_TRAINING_TIMEOUT: &str = "DB_TRAINING_TIMEOUT_SECS";
/// Environment variable overriding the health probe budget.
pub const ENV_HEALTH_TIMEOUT: &str = "DB_HEALTH_TIMEOUT_SECS";

const DEFAULT_CREDENTIAL_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TRAINING_TIMEOUT_SECS: u64 = 5;
const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 1;

/// Per-operation time budgets.
///
/// Every store round trip is bounded by exactly one of these; on expiry
/// the call fails with a timeout-kind error instead of hanging.
#[derive(Debug, Clone)]
pub struct Timeouts {
    /// Budget for registration and authentication lookups
    pub credential: Duration,
    /// Budget for training create/delete/list
    pub training: Duration,
    /// Budget for the liveness probe
    pub health: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            credential: Duration::from_secs(DEFAULT_CREDENTIAL_TIMEOUT_SECS),
            training: Duration::from_secs(DEFAULT_TRAINING_TIMEOUT_SECS),
            health: Duration::from_secs(DEFAULT_HEALTH_TIMEOUT_SECS),
        }
    }
}

/// Configuration consumed by the persistence façade.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store endpoint, e.g. `sqlite:data/workouts.db`
    pub database_url: String,
    /// Per-operation time budgets
    pub timeouts: Timeouts,
}

impl StoreConfig {
    /// Build a configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or empty, or if any
    /// timeout override is present but not a positive integer.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var(ENV_DATABASE_URL)
            .with_context(|| format!("{ENV_DATABASE_URL} must be set"))?;

        let config = Self {
            database_url,
            timeouts: Timeouts {
                credential: timeout_from_env(
                    ENV_REGISTER_TIMEOUT,
                    DEFAULT_CREDENTIAL_TIMEOUT_SECS,
                )?,
                training: timeout_from_env(ENV_TRAINING_TIMEOUT, DEFAULT_TRAINING_TIMEOUT_SECS)?,
                health: timeout_from_env(ENV_HEALTH_TIMEOUT, DEFAULT_HEALTH_TIMEOUT_SECS)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration eagerly.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is empty or any budget is zero.
    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            bail!("{ENV_DATABASE_URL} must not be empty");
        }
        if self.timeouts.credential.is_zero()
            || self.timeouts.training.is_zero()
            || self.timeouts.health.is_zero()
        {
            bail!("store operation timeouts must be positive");
        }
        Ok(())
    }
}

fn timeout_from_env(key: &str, default_secs: u64) -> Result<Duration> {
    match env::var(key) {
        Ok(raw) => {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("{key} must be a positive integer, got \"{raw}\""))?;
            Ok(Duration::from_secs(secs))
        }
        Err(env::VarError::NotPresent) => Ok(Duration::from_secs(default_secs)),
        Err(e) => Err(e).with_context(|| format!("failed to read {key}")),
    }
}
