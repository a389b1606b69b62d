use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Keeps the structured log writer flushing until dropped.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    pub log_path: PathBuf,
}

fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    let level = logging.level().unwrap_or(Level::WARN);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Installs the global subscriber: JSON lines to a file when structured
/// logging is enabled, compact text on stderr otherwise. `RUST_LOG` wins
/// over the configured level.
pub fn init_logging(logging: &LoggingConfig) -> Result<Option<LoggingGuard>> {
    let filter = env_filter(logging);

    if !logging.enable_structured {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        // Ignore error if a global subscriber is already set (e.g., when running in tests)
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(None);
    }

    let log_path = logging.file_path();
    if let Some(dir) = log_path.parent().filter(|dir| *dir != Path::new("")) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory at {}", dir.display()))?;
    }

    let file = File::create(&log_path)
        .with_context(|| format!("creating log file at {}", log_path.display()))?;

    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(Some(LoggingGuard {
        _guard: guard,
        log_path,
    }))
}
