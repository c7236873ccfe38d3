//! Browser console logging
//!
//! Routes `log` records to `console.*` and reports panics there too, so
//! warnings raised by the panel reach the developer tools.

use std::any::Any;
use std::fmt;
use std::panic::Location;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Level used when `COUNCIL_LOG_LEVEL` is unset or unparsable.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Build-time log level from `COUNCIL_LOG_LEVEL`.
pub fn level_from_env() -> LevelFilter {
    parse_level(option_env!("COUNCIL_LOG_LEVEL"))
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the console logger.
///
/// # Errors
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

pub fn format_record(level: Level, target: &str, message: &fmt::Arguments<'_>) -> String {
    format!("[{level} {target}] {message}")
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(
            record.level(),
            record.target(),
            record.args(),
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// One-line description of a panic: its message and where it happened.
pub fn describe_panic(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    match location {
        Some(location) => format!(
            "Panic: {message}\n  at {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ),
        None => format!("Panic: {message}"),
    }
}

/// Send panic messages to `console.error` instead of losing them.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        web_sys::console::error_1(&describe_panic(info.payload(), info.location()).into());
    }));
}
