//! Logging system initialization
//!
//! Sets up the tracing subscriber from the loaded configuration. Call once
//! during startup, after the configuration has been loaded.

use crate::config::AppConfig;

/// Initialize logging based on configuration
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Panics
/// * If opening the log file fails
/// * If setting the global subscriber fails (e.g., already initialized)
pub fn init_logging(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let to_console = config
        .logging
        .file
        .as_ref()
        .is_none_or(|f| f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = if to_console {
        Box::new(std::io::stderr())
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.logging.file.as_deref().unwrap_or("linksmart.log"))
            .expect("Failed to open log file");
        Box::new(file)
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.logging.level.clone());

    tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(to_console)
        .init();

    guard
}
