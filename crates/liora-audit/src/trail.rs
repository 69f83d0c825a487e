//! Append-only audit trail
//!
//! The trail stores events strictly in append order. History is never
//! rewritten: the only ways an event leaves the trail are eviction from a
//! capped trail (oldest first) and an explicit [`AuditTrail::drain`] used when
//! flushing to an external archive.

use crate::event::AuditEvent;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How many events the trail keeps in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum TrailRetention {
    /// Keep every event for the lifetime of the trail
    #[default]
    Unbounded,
    /// Keep at most `max_events`, evicting the oldest first
    Capped { max_events: usize },
}

impl TrailRetention {
    /// Build a retention policy from an optional cap
    pub fn from_cap(cap: Option<usize>) -> Self {
        match cap {
            Some(max_events) => TrailRetention::Capped { max_events },
            None => TrailRetention::Unbounded,
        }
    }

    /// Maximum number of retained events, if bounded
    pub fn cap(&self) -> Option<usize> {
        match self {
            TrailRetention::Unbounded => None,
            TrailRetention::Capped { max_events } => Some(*max_events),
        }
    }
}

/// Ordered, append-only log of audit events
#[derive(Debug, Clone, Default)]
pub struct AuditTrail {
    events: VecDeque<AuditEvent>,
    retention: TrailRetention,
    total_appended: u64,
    evicted: u64,
}

impl AuditTrail {
    /// Create an unbounded trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trail with an explicit retention policy
    pub fn with_retention(retention: TrailRetention) -> Self {
        Self {
            retention,
            ..Self::default()
        }
    }

    /// Append an event at the tail
    pub fn append(&mut self, event: AuditEvent) {
        if let TrailRetention::Capped { max_events } = self.retention {
            if max_events == 0 {
                self.total_appended += 1;
                self.evicted += 1;
                return;
            }
            while self.events.len() >= max_events {
                self.events.pop_front();
                self.evicted += 1;
            }
        }
        self.events.push_back(event);
        self.total_appended += 1;
    }

    /// Number of events currently retained
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when nothing is retained
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate retained events in append order
    pub fn iter(&self) -> impl Iterator<Item = &AuditEvent> {
        self.events.iter()
    }

    /// Copy of retained events in append order
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }

    /// Most recent event
    pub fn last(&self) -> Option<&AuditEvent> {
        self.events.back()
    }

    /// Retention policy in force
    pub fn retention(&self) -> TrailRetention {
        self.retention
    }

    /// Every event ever appended, including evicted and drained ones
    pub fn total_appended(&self) -> u64 {
        self.total_appended
    }

    /// Events dropped by the retention cap
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Remove and return every retained event, oldest first
    pub fn drain(&mut self) -> Vec<AuditEvent> {
        self.events.drain(..).collect()
    }
}
