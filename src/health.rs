// ABOUTME: Health probe status payloads for operational visibility
// ABOUTME: Serializable report returned by the persistence facade's liveness check
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check payloads.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Overall store status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The store answered the probe
    Healthy,
    /// The probe reached the store but failed
    Unhealthy,
}

/// Outcome of one liveness probe.
///
/// A failed probe is reported, not fatal: the caller decides whether to
/// crash, degrade, or retry later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// Probe outcome
    pub status: HealthStatus,
    /// Human-readable detail
    pub message: String,
    /// Probe round-trip time in milliseconds
    pub response_time_ms: u64,
    /// Unix timestamp of the probe
    pub timestamp: u64,
}

impl HealthReport {
    /// Report a successful probe.
    #[must_use]
    pub fn healthy(elapsed: Duration) -> Self {
        Self {
            status: HealthStatus::Healthy,
            message: "store is reachable".into(),
            response_time_ms: elapsed.as_millis() as u64,
            timestamp: now_unix(),
        }
    }

    /// Report a failed probe.
    #[must_use]
    pub fn unhealthy(message: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            message: message.into(),
            response_time_ms: elapsed.as_millis() as u64,
            timestamp: now_unix(),
        }
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
