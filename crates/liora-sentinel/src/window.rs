//! Bounded window of recent drift values
//!
//! Feeds the diagnostic moving average only. Nothing in here participates in
//! the pass/fail decision.

use std::collections::VecDeque;

/// Fixed-capacity FIFO of raw drift values
#[derive(Debug, Clone)]
pub struct DriftWindow {
    values: VecDeque<f64>,
    capacity: usize,
}

impl DriftWindow {
    /// Create an empty window; capacity is clamped to at least 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a value, evicting the oldest when full; returns the evicted value
    pub fn push(&mut self, drift: f64) -> Option<f64> {
        let evicted = if self.values.len() == self.capacity {
            self.values.pop_front()
        } else {
            None
        };
        self.values.push_back(drift);
        evicted
    }

    /// Arithmetic mean of the held values, `None` when empty
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
        }
    }

    /// Number of values held
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no value has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Maximum number of values held
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Held values, oldest first
    pub fn values(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }
}
