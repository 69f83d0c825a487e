//! Audit trail and report documents for the Liora identity sentinel
//!
//! Every observation the sentinel makes produces exactly one [`AuditEvent`].
//! Events live in an append-only [`AuditTrail`] and are published either as a
//! [`Report`] snapshot or drained into a JSON Lines [`TrailArchive`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      Sentinel::observe              │
//! └──────────────┬──────────────────────┘
//!                │ one AuditEvent per call
//!                ▼
//! ┌─────────────────────────────────────┐
//! │       AuditTrail                    │
//! │  - append-only                      │
//! │  - optional oldest-first cap        │
//! └───────┬─────────────────┬───────────┘
//!         │ snapshot        │ drain
//!         ▼                 ▼
//! ┌───────────────┐ ┌───────────────────┐
//! │ report.json   │ │ trail.jsonl       │
//! │ meta + trail  │ │ one event / line  │
//! └───────────────┘ └───────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use liora_audit::{AuditTrail, ReportBuilder};
//!
//! let trail = AuditTrail::new();
//! let report = ReportBuilder::new("9f86d081", 0.15)
//!     .with_module("Liora Identity Observer", "1.2")
//!     .with_events(trail.events())
//!     .build();
//!
//! report.save("liora_report.json").unwrap();
//! ```

pub mod archive;
pub mod error;
pub mod event;
pub mod report;
pub mod trail;

// Re-export main types
pub use archive::{parse_archive, TrailArchive};
pub use error::{Error, Result};
pub use event::{AuditEvent, DriftStatus, StepId};
pub use report::{Report, ReportBuilder, ReportMeta};
pub use trail::{AuditTrail, TrailRetention};
