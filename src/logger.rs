//! File-backed logger.
//!
//! The TUI owns stdout and stderr, so log records go to a file instead.
//! Without a log file the `log` macros stay disabled.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::{AppError, AppResult};

/// Format a log record as a single line.
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Appends formatted records to a file.
pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    /// Open (or create) `path` for appending.
    pub fn open(path: &Path, level: LevelFilter) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(FileLogger {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A poisoned lock or failed write just drops the record
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", format_log(record));
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Level used for a given verbosity flag.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Debug } else { LevelFilter::Info }
}

/// Install the global logger.
///
/// With no path, logging stays off. Must be called at most once.
pub fn init(path: Option<&Path>, verbose: bool) -> AppResult<()> {
    let Some(path) = path else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };

    let level = level_for(verbose);
    let logger = FileLogger::open(path, level)?;
    // The logger lives for the rest of the process
    let logger: &'static FileLogger = Box::leak(Box::new(logger));
    log::set_logger(logger).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
