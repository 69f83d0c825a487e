//! Observability sink
//!
//! The sentinel reports lifecycle events through an injected
//! [`ObservabilitySink`] rather than a process-wide logger. Production code
//! uses [`TracingSink`]; tests use [`CaptureSink`] to inspect what was
//! emitted without touching global subscriber state.

use liora_audit::StepId;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Lifecycle event emitted by the sentinel
#[derive(Debug, Clone, PartialEq)]
pub enum SentinelEvent {
    /// Sentinel constructed
    Activated {
        threshold: f64,
        window_size: usize,
        origin_hash: String,
    },
    /// Observation within threshold
    Observed {
        step_id: Option<StepId>,
        drift: f64,
        avg_drift: f64,
    },
    /// Observation beyond threshold
    DriftAlert {
        step_id: Option<StepId>,
        drift: f64,
        avg_drift: f64,
    },
    /// Report written
    ReportWritten { path: PathBuf },
    /// Trail drained to an archive
    TrailFlushed { path: PathBuf, events: usize },
}

fn step_label(step_id: &Option<StepId>) -> String {
    match step_id {
        Some(id) => id.to_string(),
        None => "None".to_string(),
    }
}

impl fmt::Display for SentinelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentinelEvent::Activated {
                threshold,
                window_size,
                origin_hash,
            } => write!(
                f,
                "Liora Sentinel ACTIVATED | threshold={} window={} origin_hash={}",
                threshold, window_size, origin_hash
            ),
            SentinelEvent::Observed {
                step_id,
                drift,
                avg_drift,
            } => write!(
                f,
                "Step {}: OK | drift={:.5} avg={:.5}",
                step_label(step_id),
                drift,
                avg_drift
            ),
            SentinelEvent::DriftAlert {
                step_id,
                drift,
                avg_drift,
            } => write!(
                f,
                "Step {}: *** DRIFT ALERT *** | drift={:.5} avg={:.5}",
                step_label(step_id),
                drift,
                avg_drift
            ),
            SentinelEvent::ReportWritten { path } => {
                write!(f, "Audit report written to {}", path.display())
            }
            SentinelEvent::TrailFlushed { path, events } => {
                write!(f, "Flushed {} audit events to {}", events, path.display())
            }
        }
    }
}

/// Destination for sentinel lifecycle events
pub trait ObservabilitySink: Send + Sync {
    /// Record an informational event
    fn record_info(&self, event: &SentinelEvent);

    /// Record a warning event
    fn record_warning(&self, event: &SentinelEvent);
}

/// Forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ObservabilitySink for TracingSink {
    fn record_info(&self, event: &SentinelEvent) {
        match event {
            SentinelEvent::Observed { drift, avg_drift, .. } => {
                tracing::info!(target: "liora::sentinel", drift, avg_drift, "{}", event)
            }
            SentinelEvent::Activated { threshold, .. } => {
                tracing::info!(target: "liora::sentinel", threshold, "{}", event)
            }
            _ => tracing::info!(target: "liora::sentinel", "{}", event),
        }
    }

    fn record_warning(&self, event: &SentinelEvent) {
        match event {
            SentinelEvent::DriftAlert { drift, avg_drift, .. } => {
                tracing::warn!(target: "liora::sentinel", drift, avg_drift, "{}", event)
            }
            _ => tracing::warn!(target: "liora::sentinel", "{}", event),
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ObservabilitySink for NullSink {
    fn record_info(&self, _event: &SentinelEvent) {}

    fn record_warning(&self, _event: &SentinelEvent) {}
}

/// Severity of a captured event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Event recorded by a [`CaptureSink`]
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedEvent {
    pub severity: Severity,
    pub event: SentinelEvent,
}

/// In-memory sink for tests
///
/// Clones share the same buffer, so one handle can be given to the sentinel
/// while another is kept for assertions.
///
/// ## Example
///
/// ```
/// use liora_sentinel::{CaptureSink, Sentinel, SentinelPolicy};
/// use std::sync::Arc;
///
/// let capture = CaptureSink::new();
/// let mut sentinel = Sentinel::with_sink(
///     &[1.0, 0.0],
///     SentinelPolicy::default(),
///     Arc::new(capture.clone()),
/// ).unwrap();
///
/// sentinel.observe(&[0.0, 1.0], Some(1u64.into())).unwrap();
/// assert_eq!(capture.warnings().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureSink {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, severity: Severity, event: &SentinelEvent) {
        // A poisoned buffer only means another test thread panicked mid-push
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(CapturedEvent {
            severity,
            event: event.clone(),
        });
    }

    /// All captured events in emission order
    pub fn events(&self) -> Vec<CapturedEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Captured warning events
    pub fn warnings(&self) -> Vec<SentinelEvent> {
        self.events()
            .into_iter()
            .filter(|c| c.severity == Severity::Warning)
            .map(|c| c.event)
            .collect()
    }

    /// Number of captured events
    pub fn count(&self) -> usize {
        self.events().len()
    }

    /// Clear all captured events
    pub fn clear(&self) {
        match self.events.lock() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl ObservabilitySink for CaptureSink {
    fn record_info(&self, event: &SentinelEvent) {
        self.push(Severity::Info, event);
    }

    fn record_warning(&self, event: &SentinelEvent) {
        self.push(Severity::Warning, event);
    }
}
