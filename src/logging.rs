//! Logging backend
//!
//! Records emitted through the `log` macros are kept in a bounded activity log that the
//! dashboard footer reads. Headless commands additionally echo them to stderr, since the
//! terminal is not owned by the dashboard there.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::env;
use std::fmt::Display;
use std::sync::{Arc, Mutex};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => LogLevel::Trace,
            Level::Debug => LogLevel::Debug,
            Level::Info => LogLevel::Info,
            Level::Warn => LogLevel::Warn,
            Level::Error => LogLevel::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// A single line of the activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            level,
            message: message.into(),
        }
    }
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.level, self.timestamp, self.message)
    }
}

/// Shared handle to the bounded activity log.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, dropping the oldest once the log is full.
    pub fn push(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() >= MAX_ACTIVITY_LOGS {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    pub fn latest(&self) -> Option<LogEntry> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.back().cloned())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `log` backend feeding the activity log.
#[derive(Debug)]
pub struct ActivityLogger {
    threshold: LogLevel,
    echo_stderr: bool,
    log: ActivityLog,
}

impl ActivityLogger {
    pub fn new(threshold: LogLevel, echo_stderr: bool, log: ActivityLog) -> Self {
        Self {
            threshold,
            echo_stderr,
            log,
        }
    }
}

impl Log for ActivityLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        should_log(metadata.level().into(), self.threshold)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry::new(record.level().into(), record.args().to_string());
        if self.echo_stderr {
            eprintln!("{}", entry);
        }
        self.log.push(entry);
    }

    fn flush(&self) {}
}

/// Installs the activity logger as the global `log` backend, using the `RUST_LOG` threshold.
///
/// # Errors
/// Returns an error if a logger was already installed.
pub fn init(echo_stderr: bool) -> Result<ActivityLog, SetLoggerError> {
    let threshold = get_rust_log_level();
    let activity = ActivityLog::new();
    let logger = ActivityLogger::new(threshold, echo_stderr, activity.clone());
    log::set_logger(Box::leak(Box::new(logger)))?;
    log::set_max_level(threshold.into());
    Ok(activity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("info"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);

        // Test with module-specific formats
        assert_eq!(parse_rust_log_level("vista=debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("vista=debug,ratatui=info"), LogLevel::Debug);

        // Test default
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
        assert!(!should_log(LogLevel::Info, LogLevel::Error));
    }

    #[test]
    fn activity_log_is_bounded() {
        let log = ActivityLog::new();
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            log.push(LogEntry::new(LogLevel::Info, format!("entry {}", i)));
        }
        assert_eq!(log.len(), MAX_ACTIVITY_LOGS);
        let latest = log.latest().unwrap();
        assert_eq!(latest.message, format!("entry {}", MAX_ACTIVITY_LOGS + 4));
    }

    #[test]
    fn logger_respects_threshold() {
        let log = ActivityLog::new();
        let logger = ActivityLogger::new(LogLevel::Warn, false, log.clone());

        logger.log(
            &Record::builder()
                .args(format_args!("ignored"))
                .level(Level::Info)
                .build(),
        );
        assert!(log.latest().is_none());

        logger.log(
            &Record::builder()
                .args(format_args!("export failed"))
                .level(Level::Error)
                .build(),
        );
        let entry = log.latest().unwrap();
        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(entry.message, "export failed");
        assert!(entry.to_string().starts_with("ERROR ["));
    }
}
