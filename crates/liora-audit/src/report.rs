//! Report: point-in-time snapshot of the audit trail
//!
//! A Report binds the sentinel's identity (module, version, origin hash,
//! threshold) to the ordered audit trail. It is built on demand and written
//! as indented JSON, replacing any previous file at the destination.

use crate::error::Result;
use crate::event::AuditEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// Report header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Producing module name
    pub module: String,

    /// Producing module version
    pub version: String,

    /// When the snapshot was taken (UTC)
    pub generated_at: DateTime<Utc>,

    /// Hash of the origin reference
    pub origin_hash: String,

    /// Configured threshold
    pub threshold: f64,
}

/// Full audit report
///
/// # Example
/// ```
/// use liora_audit::{Report, ReportBuilder};
///
/// let report = ReportBuilder::new("9f86d081", 0.15)
///     .with_module("Liora Identity Observer", "1.2")
///     .build();
///
/// assert!(report.audit_trail.is_empty());
/// assert_eq!(report.meta.threshold, 0.15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Header
    pub meta: ReportMeta,

    /// Every retained event, in observation order
    pub audit_trail: Vec<AuditEvent>,
}

impl Report {
    /// Serialize with four-space indentation
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the report, overwriting any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_pretty_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a report from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let report: Report = serde_json::from_str(&contents)?;
        Ok(report)
    }

    /// Number of alerts in the trail
    pub fn alert_count(&self) -> usize {
        self.audit_trail.iter().filter(|e| e.is_alert()).count()
    }
}

/// Builder for constructing reports
pub struct ReportBuilder {
    module: String,
    version: String,
    origin_hash: String,
    threshold: f64,
    events: Vec<AuditEvent>,
}

impl ReportBuilder {
    /// Start a report for the given origin and threshold
    pub fn new<S: Into<String>>(origin_hash: S, threshold: f64) -> Self {
        Self {
            module: String::new(),
            version: String::new(),
            origin_hash: origin_hash.into(),
            threshold,
            events: Vec::new(),
        }
    }

    /// Set the producing module identity
    pub fn with_module<S: Into<String>>(mut self, module: S, version: S) -> Self {
        self.module = module.into();
        self.version = version.into();
        self
    }

    /// Append events to the trail section
    pub fn with_events<I>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = AuditEvent>,
    {
        self.events.extend(events);
        self
    }

    /// Build the report, stamping the generation time
    pub fn build(self) -> Report {
        Report {
            meta: ReportMeta {
                module: self.module,
                version: self.version,
                generated_at: Utc::now(),
                origin_hash: self.origin_hash,
                threshold: self.threshold,
            },
            audit_trail: self.events,
        }
    }
}
