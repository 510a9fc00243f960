//! Console Logger
//!
//! `log` sink that writes to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Forwards records to `console.debug/log/warn/error` by level
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format!("{} {}", record.level(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::log_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

#[derive(Debug)]
pub enum LoggerError {
    AlreadyInstalled,
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::AlreadyInstalled => write!(f, "a logger is already installed"),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Install the console logger at `level`
pub fn init(level: LevelFilter) -> Result<(), LoggerError> {
    log::set_logger(&LOGGER).map_err(|_| LoggerError::AlreadyInstalled)?;
    log::set_max_level(level);
    Ok(())
}
