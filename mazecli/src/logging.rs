use std::{
    io::Write as _,
    sync::{OnceLock, RwLock},
};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<CliLogger> = OnceLock::new();

pub fn get_logger() -> &'static CliLogger {
    const DEFAULT_LEVEL: log::Level = log::Level::Warn;

    LOGGER.get_or_init(|| CliLogger::new(DEFAULT_LEVEL))
}

/// Installs the logger, `verbose` lowers the level to debug.
pub fn init(verbose: bool) {
    let logger = get_logger();
    if verbose {
        logger.set_min_level(log::Level::Debug);
    }

    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

/// Writes records to stderr as `[LEVEL source] message`.
pub struct CliLogger {
    min_level: RwLock<log::Level>,
}

impl CliLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::Level {
        // a poisoned lock still holds a valid level
        *self.min_level.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self.min_level.write().unwrap_or_else(|e| e.into_inner()) = level;
    }

    fn format(record: &Record) -> String {
        format!(
            "[{:<5} {}] {}",
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr().lock(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
