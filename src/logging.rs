//! File logging.
//!
//! The terminal belongs to the UI, so all `tracing` output goes to a log
//! file. Events from the HTTP stack are dropped below `warn` to keep the
//! file readable.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::{
    filter::{self, EnvFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

use crate::config::{ClientConfig, DEFAULT_LOG_FILTER};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("no log directory could be determined")]
    NoLogPath,

    #[error("could not open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a global logger is already installed")]
    AlreadyInstalled,
}

const NOISY_TARGETS: [&str; 5] = ["hyper", "reqwest", "rustls", "mio", "want"];

/// Parse a filter directive, falling back to the default level on error.
pub fn parse_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Open (append) the log file, creating its parent directory.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let io_err = |source| LoggingError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)
}

/// Build a subscriber that writes to `file` without installing it.
pub fn file_subscriber(
    directive: &str,
    file: File,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    let writer = BoxMakeWriter::new(Arc::new(file));
    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false)
        .with_target(true);

    tracing_subscriber::registry().with(
        file_log
            .with_filter(parse_filter(directive))
            .with_filter(filter::filter_fn(|metadata| {
                let noisy = NOISY_TARGETS
                    .iter()
                    .any(|prefix| metadata.target().starts_with(prefix));
                !noisy || *metadata.level() <= tracing::Level::WARN
            })),
    )
}

/// Install the global file logger. Returns the path being written.
pub fn init_logging(config: &ClientConfig) -> Result<PathBuf, LoggingError> {
    let path = config.log_path().ok_or(LoggingError::NoLogPath)?;
    let file = open_log_file(&path)?;
    tracing::subscriber::set_global_default(file_subscriber(&config.log_filter, file))
        .map_err(|_| LoggingError::AlreadyInstalled)?;
    tracing::info!(path = %path.display(), filter = %config.log_filter, "Logging initialized");
    Ok(path)
}
