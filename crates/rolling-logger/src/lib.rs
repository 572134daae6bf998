//! Rolling Logger
//!
//! A `log` backend for browser applications. Every accepted record is
//! written to the console (stderr off wasm) and kept in a bounded ring
//! buffer so the most recent lines can be inspected at runtime.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Number of lines kept when the caller has no preference
pub const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("a logger is already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Console logger with a circular buffer of recent lines
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    /// A capacity of zero is clamped to one line.
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Recent lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.buffer().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }

    fn buffer(&self) -> MutexGuard<'_, VecDeque<String>> {
        // A panic while holding the lock leaves the buffer usable.
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, line: String) {
        let mut lines = self.buffer();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;
    match level {
        Level::Error => console::error_1(&line.into()),
        Level::Warn => console::warn_1(&line.into()),
        Level::Info => console::info_1(&line.into()),
        Level::Debug | Level::Trace => console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install a process-wide logger and return a handle to its buffer.
///
/// Fails if any `log` backend was installed before.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RollingLogger, LoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_at(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("tests")
                .build(),
        );
    }

    #[test]
    fn test_records_below_level_are_dropped() {
        let logger = RollingLogger::new(LevelFilter::Info, 10);

        log_at(&logger, Level::Debug, "hidden");
        log_at(&logger, Level::Warn, "shown");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("shown"));
        assert!(lines[0].contains("WARN"));
    }

    #[test]
    fn test_buffer_keeps_most_recent_lines() {
        let logger = RollingLogger::new(LevelFilter::Trace, 3);

        for i in 0..5 {
            log_at(&logger, Level::Info, &format!("line {}", i));
        }

        let lines = logger.recent();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);

        log_at(&logger, Level::Info, "first");
        log_at(&logger, Level::Info, "second");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("second"));
    }

    #[test]
    fn test_clear_empties_buffer() {
        let logger = RollingLogger::new(LevelFilter::Info, 4);
        log_at(&logger, Level::Error, "boom");

        logger.clear();

        assert!(logger.recent().is_empty());
    }
}
