/*!
 * Liora CLI - Identity Coherence Sentinel
 *
 * Without `--demo` the binary only prints guidance. With `--demo` it runs the
 * built-in drift simulation and writes the audit report.
 */

use clap::{Parser, ValueEnum};
use liora::{
    config::{LioraConfig, LogLevel},
    error::{Result, EXIT_SUCCESS},
    logging, run_demo,
};
use liora_sentinel::TracingSink;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "liora")]
#[command(version, about = "LIORA - Identity Coherence Sentinel", long_about = None)]
struct Cli {
    /// Run built-in drift simulation
    #[arg(long)]
    demo: bool,

    /// Path to TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of simulation steps
    #[arg(long)]
    steps: Option<u32>,

    /// Seed for the simulated random walk
    #[arg(long)]
    seed: Option<u64>,

    /// Cosine distance threshold
    #[arg(long)]
    threshold: Option<f64>,

    /// Diagnostic window size
    #[arg(long)]
    window_size: Option<usize>,

    /// Report output path
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Persistent log file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_enum)]
    log_level: Option<LogLevelArg>,

    /// Enable verbose logging (equivalent to --log-level=debug)
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

impl Cli {
    /// Apply CLI overrides on top of the file/default configuration
    fn apply(&self, config: &mut LioraConfig) {
        if let Some(steps) = self.steps {
            config.demo.steps = steps;
        }
        if let Some(seed) = self.seed {
            config.demo.seed = seed;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(window_size) = self.window_size {
            config.window_size = window_size;
        }
        if let Some(ref report) = self.report {
            config.report_path = report.clone();
        }
        if let Some(ref log) = self.log {
            config.log_file = log.clone();
        }
        if let Some(level) = self.log_level {
            config.log_level = level.into();
        }
        config.verbose |= self.verbose;
    }
}

fn main() {
    let code = match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if !cli.demo {
        println!("Run with --demo to execute the LIORA simulation.");
        return Ok(());
    }

    let mut config = match cli.config {
        Some(ref path) => LioraConfig::from_file(path)?,
        None => LioraConfig::default(),
    };
    cli.apply(&mut config);
    config.validate()?;

    logging::init_logging(&config)?;
    tracing::debug!(?config, "configuration loaded");

    let outcome = run_demo(&config, Arc::new(TracingSink))?;
    tracing::info!("{}", outcome.stats.summary());

    Ok(())
}
