/*!
 * Liora - Identity Coherence Sentinel
 *
 * Passive observation of semantic identity drift:
 * - Cosine distance of each identity vector against a fixed origin
 * - Instant threshold decision, no temporal smoothing
 * - Windowed drift average as a diagnostic only
 * - Append-only audit trail exported as a JSON report
 *
 * The drift detector itself lives in `liora-sentinel`; this crate wires it
 * to configuration, logging and the demonstration loop.
 */

pub mod config;
pub mod error;
pub mod logging;
pub mod simulation;

// Re-export commonly used types
pub use config::{DemoConfig, LioraConfig, LogLevel};
pub use error::{LioraError, Result};
pub use simulation::{run_demo, DemoOutcome};

pub use liora_sentinel::{Observation, Sentinel, SentinelPolicy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
