//! Subscriber setup for `tracing`
//!
//! Human-readable events go to stderr so stdout carries only reports.
//! With `[logging] local_enabled = true`, the same events are also written
//! as JSON lines to `<local_path>/medroster.log`, rotated daily or hourly.

use crate::config::LoggingConfig;
use crate::domain::{MedrosterError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// File name prefix of the rolling JSON log
pub const LOG_FILE_PREFIX: &str = "medroster.log";

/// Keeps the file writer alive; drop it last so buffered events are flushed
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// Directory of the JSON log, when file logging is on
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Installs the global subscriber
///
/// `RUST_LOG` takes precedence over `log_level` when set.
///
/// # Errors
///
/// Fails on an unknown log level or if the log directory cannot be created.
/// Nothing is installed in either case.
///
/// # Example
///
/// ```no_run
/// use medroster::logging::init_logging;
/// use medroster::config::LoggingConfig;
///
/// let guard = init_logging("debug", &LoggingConfig::default()).expect("logging");
/// tracing::debug!("visible");
/// drop(guard);
/// ```
pub fn init_logging(log_level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(log_level)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    let mut layers = vec![tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter.clone())
        .boxed()];

    let file_guard = if config.local_enabled {
        let (writer, guard) = open_log_file(config)?;
        layers.push(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(writer)
                .with_filter(filter)
                .boxed(),
        );
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry().with(layers).init();

    let log_dir = config
        .local_enabled
        .then(|| PathBuf::from(&config.local_path));
    tracing::debug!(
        level = %level,
        log_dir = ?log_dir,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
        log_dir,
    })
}

fn default_filter(level: Level) -> EnvFilter {
    EnvFilter::new(format!("medroster={level}"))
}

fn rotation_for(name: &str) -> Rotation {
    match name {
        "hourly" => Rotation::HOURLY,
        _ => Rotation::DAILY,
    }
}

fn open_log_file(config: &LoggingConfig) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        MedrosterError::Configuration(format!(
            "Failed to create log directory {}: {e}",
            config.local_path
        ))
    })?;

    let appender = RollingFileAppender::new(
        rotation_for(&config.local_rotation),
        &config.local_path,
        LOG_FILE_PREFIX,
    );
    Ok(tracing_appender::non_blocking(appender))
}

/// Parses a level name, case-insensitively
fn parse_log_level(name: &str) -> Result<Level> {
    Level::from_str(name.trim()).map_err(|_| {
        MedrosterError::Configuration(format!(
            "Invalid log level: {name:?}. Must be one of: trace, debug, info, warn, error"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use tracing::level_filters::LevelFilter;

    #[test_case("trace", Level::TRACE)]
    #[test_case("debug", Level::DEBUG)]
    #[test_case("info", Level::INFO)]
    #[test_case("warn", Level::WARN)]
    #[test_case("ERROR", Level::ERROR)]
    #[test_case(" Debug ", Level::DEBUG)]
    fn test_parse_log_level(name: &str, expected: Level) {
        assert_eq!(parse_log_level(name).unwrap(), expected);
    }

    #[test_case("verbose")]
    #[test_case("")]
    fn test_parse_log_level_invalid(name: &str) {
        let err = parse_log_level(name).unwrap_err();
        assert!(matches!(err, MedrosterError::Configuration(_)));
    }

    #[test]
    fn test_default_filter_targets_crate() {
        assert_eq!(
            default_filter(Level::WARN).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn test_rotation_for() {
        assert_eq!(rotation_for("hourly"), Rotation::HOURLY);
        assert_eq!(rotation_for("daily"), Rotation::DAILY);
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = LoggingConfig {
            local_enabled: true,
            local_path: dir.path().join("nested/logs").to_string_lossy().to_string(),
            local_rotation: "hourly".to_string(),
        };
        let (_writer, guard) = open_log_file(&config).unwrap();
        assert!(dir.path().join("nested/logs").is_dir());
        drop(guard);
    }

    #[test]
    fn test_init_logging_rejects_bad_level_before_installing() {
        let result = init_logging("loud", &LoggingConfig::default());
        assert!(matches!(result, Err(MedrosterError::Configuration(_))));
    }
}
