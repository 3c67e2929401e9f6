use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::clock::{Clock, SystemClock};
use crate::config::logging::LoggingConfig;

use super::event::{LogEvent, LogLevel};
use super::sink::{LogFormat, LogSink, StdoutSink};

/// Builds bound loggers sharing one sink, level threshold and clock.
///
/// Constructed once at startup from [`LoggingConfig`] and threaded through
/// application state rather than living in a process-wide global. Tests
/// install a capture sink via [`LoggerFactory::with_sink`].
pub struct LoggerFactory {
    min_level: LogLevel,
    sink: Arc<dyn LogSink>,
    clock: Arc<dyn Clock>,
}

impl LoggerFactory {
    pub fn new(config: &LoggingConfig) -> Self {
        let format = config.format.parse().unwrap_or(LogFormat::Json);
        Self::with_sink(config, Arc::new(StdoutSink::new(format)))
    }

    pub fn with_sink(config: &LoggingConfig, sink: Arc<dyn LogSink>) -> Self {
        Self {
            min_level: config.level.parse().unwrap_or(LogLevel::Info),
            sink,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn logger(&self, name: &str) -> BoundLogger {
        BoundLogger {
            name: name.to_string(),
            min_level: self.min_level,
            sink: Arc::clone(&self.sink),
            clock: Arc::clone(&self.clock),
            fields: BTreeMap::new(),
        }
    }
}

/// A logging handle carrying an immutable set of bound context fields.
///
/// `bind` returns a new handle and leaves the original untouched; binding
/// {a} then {b} yields the same field set as binding {a, b} in one call,
/// with later values winning on key collision.
#[derive(Clone)]
pub struct BoundLogger {
    name: String,
    min_level: LogLevel,
    sink: Arc<dyn LogSink>,
    clock: Arc<dyn Clock>,
    fields: BTreeMap<String, Value>,
}

impl BoundLogger {
    pub fn bind(&self, fields: &[(&str, Value)]) -> Self {
        let mut bound = self.clone();
        for (key, value) in fields {
            bound.fields.insert((*key).to_string(), value.clone());
        }
        bound
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bound_fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    pub fn debug(&self, event: &str, extra: &[(&str, Value)]) {
        self.emit(LogLevel::Debug, event, extra);
    }

    pub fn info(&self, event: &str, extra: &[(&str, Value)]) {
        self.emit(LogLevel::Info, event, extra);
    }

    pub fn warn(&self, event: &str, extra: &[(&str, Value)]) {
        self.emit(LogLevel::Warning, event, extra);
    }

    pub fn error(&self, event: &str, extra: &[(&str, Value)]) {
        self.emit(LogLevel::Error, event, extra);
    }

    // Events below the threshold are dropped, not buffered. Per-call fields
    // override bound fields for this event only.
    fn emit(&self, level: LogLevel, event: &str, extra: &[(&str, Value)]) {
        if level < self.min_level {
            return;
        }
        let mut fields = self.fields.clone();
        for (key, value) in extra {
            fields.insert((*key).to_string(), value.clone());
        }
        self.sink.write(&LogEvent {
            event: event.to_string(),
            level,
            logger: self.name.clone(),
            timestamp: self.clock.now(),
            fields,
        });
    }
}
