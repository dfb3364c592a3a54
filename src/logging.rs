use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install log subscriber: {0}")]
    Init(String),
}

/// Install the global tracing subscriber writing to the configured log file.
///
/// The terminal belongs to the UI, so nothing is logged to stdout/stderr.
/// `RUST_LOG` takes precedence over `config.level`. Returns the log path.
pub fn init_tracing(config: &LoggingConfig) -> Result<PathBuf, LoggingError> {
    let path = config.file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| LoggingError::Io {
            path: path.clone(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::Io {
            path: path.clone(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(path)
}
