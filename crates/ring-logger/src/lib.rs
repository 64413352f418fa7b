//! Ring Logger
//!
//! A `log` backend that forwards every record to the browser console
//! (stderr when not on wasm32) and keeps the newest formatted lines in a
//! fixed-size circular buffer for in-app inspection.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept by the global logger
pub const DEFAULT_CAPACITY: usize = 500;

/// Fixed-capacity line buffer; the oldest line is evicted on overflow
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Newest `n` lines, oldest first
    pub fn recent(&self, n: usize) -> Vec<String> {
        let skip = self.lines.len().saturating_sub(n);
        self.lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

pub struct RingLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl RingLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "{} {:<5} {} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app_name,
            record.target(),
            record.args()
        )
    }

    pub fn recent(&self, n: usize) -> Vec<String> {
        self.buffer.lock().map(|b| b.recent(n)).unwrap_or_default()
    }
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        emit(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;
    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: OnceLock<RingLogger> = OnceLock::new();

/// Install the global logger. Fails if a logger is already installed.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RingLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Newest `n` lines captured by the global logger, oldest first
pub fn recent_lines(n: usize) -> Vec<String> {
    LOGGER.get().map(|l| l.recent(n)).unwrap_or_default()
}
