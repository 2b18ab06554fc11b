// Rust guideline compliant 2026-10-18

//! Tracing subscriber setup for applications embedding storeflow.

use crate::error::{AppError, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Logging options.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Logging level: error, warn, info or debug.
    pub level: String,
    /// Optional log file path; logs go to stdout otherwise.
    pub file: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Installs a JSON tracing subscriber as the process-wide default.
///
/// # Arguments
///
/// * `options` - Logging options
///
/// # Returns
///
/// A guard that flushes the file writer when dropped, if logging to a file.
///
/// # Errors
///
/// Returns an error if:
/// - The level is unknown
/// - The log file cannot be opened
/// - A global subscriber is already installed
pub fn init_tracing(options: &LogOptions) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(&options.level)?;
    let builder = fmt().with_max_level(level).with_target(false).json();

    let (installed, guard) = match &options.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (builder.with_writer(writer).try_init(), Some(guard))
        }
        None => (builder.try_init(), None),
    };
    installed.map_err(|err| AppError::Logging(err.to_string()))?;

    Ok(guard)
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` for unknown levels.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => Err(AppError::InvalidInput(format!("Invalid log level: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
        assert!(parse_log_level("trace").is_err());
    }

    #[test]
    fn test_unknown_level_fails_before_install() {
        let options = LogOptions {
            level: "verbose".to_string(),
            file: None,
        };
        assert!(init_tracing(&options).is_err());
    }

    // The only test in this binary that installs a subscriber.
    #[test]
    fn test_file_logging_installs_once() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("storeflow.log");
        let options = LogOptions {
            level: "debug".to_string(),
            file: Some(path.clone()),
        };

        let guard = init_tracing(&options).unwrap();
        assert!(guard.is_some());
        assert!(path.exists());

        let err = init_tracing(&LogOptions::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::LoggingError);
        assert!(err.to_string().starts_with("Logging setup failed"));
    }
}
