//! Sentinel Policy
//!
//! Defines the threshold and bookkeeping limits for a sentinel. A policy is
//! fixed for the sentinel's lifetime.

use crate::error::{Result, SentinelError};
use liora_audit::TrailRetention;
use serde::{Deserialize, Serialize};

/// Default maximum tolerable cosine distance
pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// Default diagnostic window length
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Sentinel operational policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentinelPolicy {
    /// Maximum cosine distance from the origin that still counts as coherent
    ///
    /// An observation is safe when `drift <= threshold`.
    ///
    /// **Default:** 0.15
    pub threshold: f64,

    /// Number of recent drift values averaged for the diagnostic mean
    ///
    /// Never influences the alert decision.
    ///
    /// **Default:** 5
    pub window_size: usize,

    /// In-memory retention of the audit trail
    ///
    /// **Default:** unbounded
    #[serde(default)]
    pub retention: TrailRetention,
}

impl Default for SentinelPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            window_size: DEFAULT_WINDOW_SIZE,
            retention: TrailRetention::Unbounded,
        }
    }
}

impl SentinelPolicy {
    /// Create a policy with a custom threshold
    ///
    /// Other parameters will use defaults.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    /// Override the diagnostic window size
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Override the trail retention
    pub fn retention(mut self, retention: TrailRetention) -> Self {
        self.retention = retention;
        self
    }

    /// Validate the policy configuration
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(SentinelError::invalid_policy(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }

        if self.threshold < 0.0 {
            return Err(SentinelError::invalid_policy(format!(
                "threshold must be non-negative, got {}",
                self.threshold
            )));
        }

        if self.window_size == 0 {
            return Err(SentinelError::invalid_policy(
                "window_size must be at least 1",
            ));
        }

        Ok(())
    }
}
