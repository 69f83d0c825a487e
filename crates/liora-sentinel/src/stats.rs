//! Observation Statistics
//!
//! Running counters kept by the sentinel. Unlike the audit trail these are
//! never evicted or drained, so they cover the sentinel's whole lifetime.

use serde::{Deserialize, Serialize};

/// Lifetime counters for one sentinel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationStats {
    /// Successful observations
    pub observations: u64,

    /// Observations within threshold
    pub coherent: u64,

    /// Observations beyond threshold
    pub alerts: u64,

    /// Largest raw drift seen
    pub max_drift: Option<f64>,

    /// Raw drift of the most recent observation
    pub last_drift: Option<f64>,
}

impl ObservationStats {
    /// Create a new empty stats object
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successful observation
    pub fn record(&mut self, drift: f64, is_safe: bool) {
        self.observations += 1;
        if is_safe {
            self.coherent += 1;
        } else {
            self.alerts += 1;
        }
        self.max_drift = Some(self.max_drift.map_or(drift, |m| m.max(drift)));
        self.last_drift = Some(drift);
    }

    /// Fraction of observations that alerted (0.0 - 1.0)
    pub fn alert_ratio(&self) -> f64 {
        if self.observations == 0 {
            0.0
        } else {
            self.alerts as f64 / self.observations as f64
        }
    }

    /// Format a human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Observations: {} | {} coherent | {} alerts ({:.1}%) | max drift {:.5}",
            self.observations,
            self.coherent,
            self.alerts,
            self.alert_ratio() * 100.0,
            self.max_drift.unwrap_or(0.0)
        )
    }
}
