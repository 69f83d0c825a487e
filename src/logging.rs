/*!
 * Logging and tracing initialization
 *
 * Every run logs to two places at once: a compact console stream on stdout
 * and a persistent, append-only log file.
 */

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LioraConfig;
use crate::error::{LioraError, Result};

/// Build the env filter for a given level
///
/// `RUST_LOG` wins when set.
pub fn build_filter(level: Level) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level)))
        .map_err(|e| LioraError::Logging(format!("Failed to create log filter: {}", e)))
}

fn default_directives(level: Level) -> String {
    format!("liora={level},liora_sentinel={level}")
}

/// Initialize console + file logging based on configuration
pub fn init_logging(config: &LioraConfig) -> Result<()> {
    let env_filter = build_filter(config.effective_log_level())?;
    init_dual_logging(&config.log_file, env_filter)
}

fn init_dual_logging(log_path: &Path, env_filter: EnvFilter) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LioraError::Logging(format!("Failed to create log directory: {}", e))
            })?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| LioraError::Logging(format!("Failed to open log file: {}", e)))?;

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE)
        .compact();

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false); // No ANSI colors in file

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LioraError::Logging(format!("Failed to install subscriber: {}", e)))?;

    Ok(())
}

/// Initialize logging with custom format for testing
#[cfg(test)]
pub fn init_test_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("liora=debug"));

        let fmt_layer = fmt::layer().with_test_writer().with_target(false).compact();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .ok(); // Ignore error if already initialized
    });
}
