//! The Sentinel: passive identity-drift observer
//!
//! Holds a unit-norm origin and compares every observed vector against it.
//! The alert decision uses the single most recent drift only; the windowed
//! average is carried along as diagnostic metadata.

use crate::error::{Result, SentinelError};
use crate::policy::SentinelPolicy;
use crate::sink::{ObservabilitySink, SentinelEvent, TracingSink};
use crate::stats::ObservationStats;
use crate::vector::{
    normalize, round_to, stable_vector_hash, unit_cosine_distance, AUDIT_PRECISION,
};
use crate::window::DriftWindow;
use chrono::Utc;
use liora_audit::{AuditEvent, AuditTrail, DriftStatus, Report, ReportBuilder, StepId, TrailArchive};
use std::path::Path;
use std::sync::Arc;

/// Module name stamped into reports
pub const REPORT_MODULE: &str = "Liora Identity Observer";

/// Module version stamped into reports
pub const REPORT_VERSION: &str = "1.2";

/// Outcome of a single observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// `drift <= threshold`
    pub is_safe: bool,

    /// Raw cosine distance from the origin
    pub drift: f64,

    /// Mean of the drift window after this observation (diagnostic only)
    pub avg_drift: f64,

    /// Decision label
    pub status: DriftStatus,
}

impl Observation {
    /// `(is_safe, drift, avg_drift)`
    pub fn into_tuple(self) -> (bool, f64, f64) {
        (self.is_safe, self.drift, self.avg_drift)
    }
}

/// Identity coherence sentinel
///
/// Never mutates the vectors it is shown. Origin and threshold are fixed at
/// construction. Not internally synchronised: wrap in a `Mutex` if several
/// callers must share one instance.
pub struct Sentinel {
    /// Normalized origin reference
    origin: Vec<f64>,

    /// SHA-256 of the normalized origin
    origin_hash: String,

    /// Operational policy
    policy: SentinelPolicy,

    /// Recent raw drift values
    window: DriftWindow,

    /// Append-only audit log
    trail: AuditTrail,

    /// Lifetime counters
    stats: ObservationStats,

    /// Observability destination
    sink: Arc<dyn ObservabilitySink>,
}

impl std::fmt::Debug for Sentinel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sentinel")
            .field("origin_hash", &self.origin_hash)
            .field("policy", &self.policy)
            .field("observations", &self.stats.observations)
            .finish()
    }
}

impl Sentinel {
    /// Create a sentinel that reports through `tracing`
    ///
    /// # Errors
    /// `InvalidPolicy` for a negative/non-finite threshold or zero window,
    /// `DegenerateVector` when the origin is the zero vector.
    pub fn new(origin: &[f64], policy: SentinelPolicy) -> Result<Self> {
        Self::with_sink(origin, policy, Arc::new(TracingSink))
    }

    /// Create a sentinel with an explicit observability sink
    pub fn with_sink(
        origin: &[f64],
        policy: SentinelPolicy,
        sink: Arc<dyn ObservabilitySink>,
    ) -> Result<Self> {
        policy.validate()?;

        let origin = normalize(origin)?;
        let origin_hash = stable_vector_hash(&origin);

        sink.record_info(&SentinelEvent::Activated {
            threshold: policy.threshold,
            window_size: policy.window_size,
            origin_hash: origin_hash.clone(),
        });

        Ok(Self {
            origin,
            origin_hash,
            window: DriftWindow::new(policy.window_size),
            trail: AuditTrail::with_retention(policy.retention),
            stats: ObservationStats::new(),
            policy,
            sink,
        })
    }

    /// Observe one identity vector
    ///
    /// Appends exactly one audit event on success. On error nothing is
    /// recorded and no state changes.
    ///
    /// # Errors
    /// `DegenerateVector` for a zero vector, `DimensionMismatch` when the
    /// length differs from the origin.
    pub fn observe(&mut self, current: &[f64], step_id: Option<StepId>) -> Result<Observation> {
        let current = normalize(current)?;
        if current.len() != self.origin.len() {
            return Err(SentinelError::DimensionMismatch {
                expected: self.origin.len(),
                actual: current.len(),
            });
        }
        let drift = unit_cosine_distance(&self.origin, &current)?;

        self.window.push(drift);
        let avg_drift = self.window.mean().unwrap_or(drift);

        // Decision uses the instantaneous drift only
        let is_safe = drift <= self.policy.threshold;
        let status = DriftStatus::from_safe(is_safe);

        self.trail.append(AuditEvent {
            timestamp: Utc::now(),
            step_id: step_id.clone(),
            drift_raw: round_to(drift, AUDIT_PRECISION),
            drift_avg: round_to(avg_drift, AUDIT_PRECISION),
            threshold: self.policy.threshold,
            status,
            origin_hash: self.origin_hash.clone(),
            action_required: !is_safe,
        });
        self.stats.record(drift, is_safe);

        if is_safe {
            self.sink.record_info(&SentinelEvent::Observed {
                step_id,
                drift,
                avg_drift,
            });
        } else {
            self.sink.record_warning(&SentinelEvent::DriftAlert {
                step_id,
                drift,
                avg_drift,
            });
        }

        Ok(Observation {
            is_safe,
            drift,
            avg_drift,
            status,
        })
    }

    /// Snapshot the metadata and retained trail
    pub fn build_report(&self) -> Report {
        ReportBuilder::new(self.origin_hash.clone(), self.policy.threshold)
            .with_module(REPORT_MODULE, REPORT_VERSION)
            .with_events(self.trail.iter().cloned())
            .build()
    }

    /// Write the report to `path`, replacing any existing file
    ///
    /// I/O failures are returned as-is; there is no retry.
    pub fn export_report<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.build_report().save(path)?;
        self.sink.record_info(&SentinelEvent::ReportWritten {
            path: path.to_path_buf(),
        });
        Ok(())
    }

    /// Drain the retained trail into a JSON Lines archive
    ///
    /// Returns the number of events written. The trail is only drained once
    /// the write has succeeded.
    pub fn flush_trail<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let mut archive = TrailArchive::open(path)?;
        let pending = self.trail.events();
        let written = archive.append(&pending)?;
        self.trail.drain();

        self.sink.record_info(&SentinelEvent::TrailFlushed {
            path: path.to_path_buf(),
            events: written,
        });
        Ok(written)
    }

    /// Recompute the origin hash and compare with the stored stamp
    pub fn verify_origin_integrity(&self) -> bool {
        stable_vector_hash(&self.origin) == self.origin_hash
    }

    /// Normalized origin reference
    pub fn origin(&self) -> &[f64] {
        &self.origin
    }

    /// Hex SHA-256 of the origin reference
    pub fn origin_hash(&self) -> &str {
        &self.origin_hash
    }

    /// Configured threshold
    pub fn threshold(&self) -> f64 {
        self.policy.threshold
    }

    /// Policy in force
    pub fn policy(&self) -> &SentinelPolicy {
        &self.policy
    }

    /// Vector dimension every observation must match
    pub fn dimension(&self) -> usize {
        self.origin.len()
    }

    /// Diagnostic drift window
    pub fn window(&self) -> &DriftWindow {
        &self.window
    }

    /// Audit trail
    pub fn trail(&self) -> &AuditTrail {
        &self.trail
    }

    /// Lifetime counters
    pub fn stats(&self) -> &ObservationStats {
        &self.stats
    }
}
