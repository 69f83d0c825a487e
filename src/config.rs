/*!
 * Configuration types for Liora
 */

use std::path::{Path, PathBuf};

use liora_sentinel::{SentinelPolicy, TrailRetention, DEFAULT_THRESHOLD, DEFAULT_WINDOW_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::{LioraError, Result};

/// Main configuration for a Liora run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LioraConfig {
    /// Maximum tolerable cosine distance from the origin
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Diagnostic moving-average window length
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Cap on in-memory audit events (None = unbounded)
    #[serde(default)]
    pub trail_capacity: Option<usize>,

    /// Log level for diagnostic output
    #[serde(default)]
    pub log_level: LogLevel,

    /// Persistent log file, appended to on every run
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Enable verbose logging (shorthand for log_level = debug)
    #[serde(default)]
    pub verbose: bool,

    /// Where the JSON report is written
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,

    /// Demonstration loop parameters
    #[serde(default)]
    pub demo: DemoConfig,
}

impl Default for LioraConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            window_size: default_window_size(),
            trail_capacity: None,
            log_level: LogLevel::Info,
            log_file: default_log_file(),
            verbose: false,
            report_path: default_report_path(),
            demo: DemoConfig::default(),
        }
    }
}

/// Parameters for the synthetic drift simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of observation steps
    pub steps: u32,

    /// RNG seed; identical seeds replay identical walks
    pub seed: u64,

    /// Origin identity vector
    pub origin: Vec<f64>,

    /// Standard deviation of per-step Gaussian noise
    pub noise_sigma: f64,

    /// Noise multiplier before `storm_from_step`
    pub calm_factor: f64,

    /// Noise multiplier from `storm_from_step` onwards
    pub storm_factor: f64,

    /// First step using `storm_factor`
    pub storm_from_step: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            steps: 12,
            seed: 42,
            origin: vec![0.85, 0.90, 0.40, 0.99],
            noise_sigma: 0.02,
            calm_factor: 0.3,
            storm_factor: 0.9,
            storm_from_step: 6,
        }
    }
}

impl DemoConfig {
    /// Noise multiplier for step `t` (1-based)
    pub fn factor_for(&self, t: u32) -> f64 {
        if t < self.storm_from_step {
            self.calm_factor
        } else {
            self.storm_factor
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,

    /// Warnings and errors
    Warn,

    /// Info, warnings, and errors
    #[default]
    Info,

    /// Debug and above
    Debug,

    /// All messages including traces
    Trace,
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

// Default value functions for serde
fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

fn default_log_file() -> PathBuf {
    PathBuf::from("liora_audit.log")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("liora_report.json")
}

impl LioraConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| LioraError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| LioraError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| LioraError::Config(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Sentinel policy derived from this configuration
    pub fn policy(&self) -> SentinelPolicy {
        SentinelPolicy::with_threshold(self.threshold)
            .window_size(self.window_size)
            .retention(TrailRetention::from_cap(self.trail_capacity))
    }

    /// Effective log level after applying `verbose`
    pub fn effective_log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            self.log_level.to_tracing_level()
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.policy()
            .validate()
            .map_err(|e| LioraError::Config(e.to_string()))?;

        if self.demo.origin.is_empty() {
            return Err(LioraError::Config("demo.origin must not be empty".to_string()));
        }

        if !self.demo.noise_sigma.is_finite() || self.demo.noise_sigma < 0.0 {
            return Err(LioraError::Config(format!(
                "demo.noise_sigma must be a non-negative number, got {}",
                self.demo.noise_sigma
            )));
        }

        Ok(())
    }
}
