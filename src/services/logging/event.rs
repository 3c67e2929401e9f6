use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// A single structured record emitted through a bound logger.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub event: String,
    pub level: LogLevel,
    pub logger: String,
    pub timestamp: DateTime<Utc>,
    pub fields: BTreeMap<String, Value>,
}

impl LogEvent {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    /// Flattened JSON object. Context fields go in first, then the reserved
    /// keys, so `event`, `level`, `logger` and `timestamp` always win.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.fields {
            map.insert(key.clone(), value.clone());
        }
        map.insert("event".to_string(), Value::String(self.event.clone()));
        map.insert("level".to_string(), Value::String(self.level.to_string()));
        map.insert("logger".to_string(), Value::String(self.logger.clone()));
        map.insert(
            "timestamp".to_string(),
            Value::String(self.timestamp_rfc3339()),
        );
        Value::Object(map)
    }

    pub fn render_json(&self) -> String {
        self.to_json().to_string()
    }

    /// `timestamp [level] logger: event key=value ...` for human consumption.
    pub fn render_console(&self) -> String {
        let mut line = format!(
            "{} [{:>7}] {}: {}",
            self.timestamp_rfc3339(),
            self.level,
            self.logger,
            self.event
        );
        for (key, value) in &self.fields {
            match value {
                Value::String(s) => line.push_str(&format!(" {key}={s}")),
                other => line.push_str(&format!(" {key}={other}")),
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample_event() -> LogEvent {
        let mut fields = BTreeMap::new();
        fields.insert("user".to_string(), json!("alice"));
        fields.insert("status_code".to_string(), json!(200));
        LogEvent {
            event: "Request completed".to_string(),
            level: LogLevel::Info,
            logger: "scribr::middleware".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 45).unwrap(),
            fields,
        }
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_to_json_flattens_fields() {
        let value = sample_event().to_json();
        assert_eq!(value["event"], json!("Request completed"));
        assert_eq!(value["level"], json!("info"));
        assert_eq!(value["logger"], json!("scribr::middleware"));
        assert_eq!(value["timestamp"], json!("2025-06-01T12:30:45.000000Z"));
        assert_eq!(value["user"], json!("alice"));
        assert_eq!(value["status_code"], json!(200));
    }

    #[test]
    fn test_reserved_keys_win_over_fields() {
        let mut event = sample_event();
        event
            .fields
            .insert("event".to_string(), json!("spoofed"));
        let value = event.to_json();
        assert_eq!(value["event"], json!("Request completed"));
    }

    #[test]
    fn test_render_console_contains_key_values() {
        let line = sample_event().render_console();
        assert!(line.contains("Request completed"));
        assert!(line.contains("user=alice"));
        assert!(line.contains("status_code=200"));
        assert!(line.contains("scribr::middleware"));
    }
}
