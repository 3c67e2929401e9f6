use std::io::Write;
use std::str::FromStr;

use parking_lot::Mutex;

use super::event::LogEvent;

/// Output encoding selected by the logging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Console,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(LogFormat::Json),
            "console" => Ok(LogFormat::Console),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Destination for structured records. Writes are fast appends; a failing
/// sink is not modeled.
pub trait LogSink: Send + Sync {
    fn write(&self, event: &LogEvent);
}

pub struct StdoutSink {
    format: LogFormat,
}

impl StdoutSink {
    pub fn new(format: LogFormat) -> Self {
        Self { format }
    }
}

impl LogSink for StdoutSink {
    fn write(&self, event: &LogEvent) {
        let line = match self.format {
            LogFormat::Json => event.render_json(),
            LogFormat::Console => event.render_console(),
        };
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }
}

/// Captures emitted events so tests can assert on them.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<LogEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn write(&self, event: &LogEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Discards every record; used by benchmarks.
pub struct NullSink;

impl LogSink for NullSink {
    fn write(&self, _event: &LogEvent) {}
}
