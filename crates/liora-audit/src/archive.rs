//! JSON Lines archive for flushed audit events
//!
//! Long-running sentinels can drain their in-memory trail into an archive
//! instead of growing without bound. Each line is one [`AuditEvent`].

use crate::error::{Error, Result};
use crate::event::AuditEvent;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only JSON Lines writer
///
/// # Example
/// ```no_run
/// use liora_audit::TrailArchive;
///
/// let mut archive = TrailArchive::open("trail.jsonl").unwrap();
/// archive.append(&[]).unwrap();
/// ```
pub struct TrailArchive {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl TrailArchive {
    /// Open or create the archive in append mode
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Append events and flush; returns the number written
    pub fn append(&mut self, events: &[AuditEvent]) -> Result<usize> {
        for event in events {
            let json = serde_json::to_string(event)?;
            writeln!(self.writer, "{}", json)?;
        }
        self.writer.flush()?;
        Ok(events.len())
    }

    /// Get the path to the archive file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse every event from a JSON Lines archive
pub fn parse_archive<P: AsRef<Path>>(path: P) -> Result<Vec<AuditEvent>> {
    let contents = std::fs::read_to_string(path)?;
    let mut events = Vec::new();

    for (line_num, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let event: AuditEvent = serde_json::from_str(line)
            .map_err(|e| Error::invalid_entry(line_num + 1, &e.to_string()))?;

        events.push(event);
    }

    Ok(events)
}
