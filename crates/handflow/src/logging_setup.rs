use crate::config::LogConfig;
use anyhow::{Context, Result};
use std::fs::File;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Handle to keep the logging worker thread alive
pub struct LogGuard {
    // Kept alive until dropped
    _guard: WorkerGuard,
}

/// Initialize the logging system
pub fn init(config: &LogConfig) -> Result<Option<LogGuard>> {
    // Parse level from config (defaulting to INFO if invalid); RUST_LOG
    // takes precedence.
    let build_filter = || {
        EnvFilter::builder()
            .with_default_directive(
                config
                    .level
                    .parse()
                    .unwrap_or_else(|_| tracing::level_filters::LevelFilter::INFO.into()),
            )
            .from_env_lossy()
    };

    // Console layer
    let console_layer = if config.console {
        Some(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(false)
                .with_filter(build_filter()),
        )
    } else {
        None
    };

    // File layer
    let (file_layer, guard) = if let Some(path) = &config.file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file: {:?}", path))?;

        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file);

        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(build_filter());

        (
            Some(layer),
            Some(LogGuard {
                _guard: worker_guard,
            }),
        )
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized at level: {}", config.level);

    Ok(guard)
}
