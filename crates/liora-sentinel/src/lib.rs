//! Liora Sentinel: identity coherence observer
//!
//! The Sentinel watches an evolving identity vector and reports whether it
//! stays within a cosine-distance threshold of a fixed origin. It is passive:
//! it records and reports, it never corrects.
//!
//! # Decision Flow
//!
//! ```text
//! ┌─────────────┐
//! │  Normalize  │──> reject zero vector / wrong dimension
//! └──────┬──────┘
//!        │
//!        v
//! ┌─────────────┐
//! │  Measure    │──> drift = 1 - origin · current
//! └──────┬──────┘
//!        │
//!        v
//! ┌─────────────┐
//! │  Decide     │──> drift <= threshold ? COHERENT : DRIFT_ALERT
//! └──────┬──────┘
//!        │
//!        v
//! ┌─────────────┐
//! │  Record     │──> audit event + sink (window mean is diagnostic only)
//! └─────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use liora_sentinel::{Sentinel, SentinelPolicy};
//!
//! # fn example() -> liora_sentinel::Result<()> {
//! let mut sentinel = Sentinel::new(&[0.85, 0.90, 0.40, 0.99], SentinelPolicy::default())?;
//!
//! let obs = sentinel.observe(&[0.84, 0.91, 0.41, 0.98], Some(1u64.into()))?;
//! if !obs.is_safe {
//!     println!("drift {:.4} exceeds threshold", obs.drift);
//! }
//!
//! sentinel.export_report("liora_report.json")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod policy;
pub mod sentinel;
pub mod sink;
pub mod stats;
pub mod vector;
pub mod window;

pub use error::{Result, SentinelError};
pub use policy::{SentinelPolicy, DEFAULT_THRESHOLD, DEFAULT_WINDOW_SIZE};
pub use sentinel::{Observation, Sentinel, REPORT_MODULE, REPORT_VERSION};
pub use sink::{
    CaptureSink, CapturedEvent, NullSink, ObservabilitySink, SentinelEvent, Severity, TracingSink,
};
pub use stats::ObservationStats;
pub use vector::{cosine_distance, normalize, stable_vector_hash};
pub use window::DriftWindow;

// Audit types appear in the public API
pub use liora_audit::{AuditEvent, AuditTrail, DriftStatus, Report, StepId, TrailRetention};
