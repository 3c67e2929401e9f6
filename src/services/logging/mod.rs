pub mod event;
pub mod logger;
pub mod sink;

pub use event::{LogEvent, LogLevel};
pub use logger::{BoundLogger, LoggerFactory};
pub use sink::{LogFormat, LogSink, MemorySink, NullSink, StdoutSink};
