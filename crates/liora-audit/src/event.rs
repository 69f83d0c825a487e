//! Audit events recorded for every sentinel observation

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Caller-supplied step identifier
///
/// Opaque to the sentinel: it may repeat, be non-monotonic, or be any JSON
/// value at all. It is carried through to the audit record untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(Value);

impl StepId {
    /// Wrap an arbitrary JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the underlying JSON value
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<Value> for StepId {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<u64> for StepId {
    fn from(value: u64) -> Self {
        Self(Value::from(value))
    }
}

impl From<u32> for StepId {
    fn from(value: u32) -> Self {
        Self(Value::from(value))
    }
}

impl From<i64> for StepId {
    fn from(value: i64) -> Self {
        Self(Value::from(value))
    }
}

impl From<i32> for StepId {
    fn from(value: i32) -> Self {
        Self(Value::from(value))
    }
}

impl From<usize> for StepId {
    fn from(value: usize) -> Self {
        Self(Value::from(value))
    }
}

impl From<&str> for StepId {
    fn from(value: &str) -> Self {
        Self(Value::from(value))
    }
}

impl From<String> for StepId {
    fn from(value: String) -> Self {
        Self(Value::from(value))
    }
}

/// Instantaneous pass/fail label for one observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriftStatus {
    /// Drift is within the configured threshold
    Coherent,
    /// Drift exceeded the configured threshold
    DriftAlert,
}

impl DriftStatus {
    /// Classify a safety decision
    pub fn from_safe(is_safe: bool) -> Self {
        if is_safe {
            DriftStatus::Coherent
        } else {
            DriftStatus::DriftAlert
        }
    }

    /// Convert status to its wire label
    pub fn as_str(&self) -> &str {
        match self {
            DriftStatus::Coherent => "COHERENT",
            DriftStatus::DriftAlert => "DRIFT_ALERT",
        }
    }

    /// Whether this status requires corrective action
    pub fn is_alert(&self) -> bool {
        matches!(self, DriftStatus::DriftAlert)
    }
}

impl fmt::Display for DriftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriftStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "COHERENT" => Ok(DriftStatus::Coherent),
            "DRIFT_ALERT" => Ok(DriftStatus::DriftAlert),
            _ => Err(Error::invalid_status(s)),
        }
    }
}

/// One immutable record per observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Observation time (UTC)
    pub timestamp: DateTime<Utc>,

    /// Caller-supplied step identifier, `null` when absent
    pub step_id: Option<StepId>,

    /// Raw cosine distance, rounded to six decimals
    pub drift_raw: f64,

    /// Windowed mean drift, rounded to six decimals (diagnostic only)
    pub drift_avg: f64,

    /// Threshold in force for this observation
    pub threshold: f64,

    /// Decision label
    pub status: DriftStatus,

    /// Hash of the origin reference
    pub origin_hash: String,

    /// True when the drift exceeded the threshold
    pub action_required: bool,
}

impl AuditEvent {
    /// Whether this event recorded an alert
    pub fn is_alert(&self) -> bool {
        self.status.is_alert()
    }
}
