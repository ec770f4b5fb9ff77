//! Core logger types and engine

pub mod config;
pub mod decoration;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod redactor;
pub mod stream;
pub mod timer;
pub mod timestamp;
pub mod type_key;

pub use config::{LoggerConfig, LoggerOptions, ScopeMerge};
pub use decoration::{Decoration, DecorationOverrides, Decorations};
pub use error::{LoggerError, Result};
pub use formatter::OutputFormat;
pub use log_level::{levels, should_emit, to_level, Level, LogLevel, OutputChannel};
pub use logger::{default_logger, Logger, LoggerBuilder};
pub use message::{MessageInput, MessageRecord};
pub use metrics::LoggerMetrics;
pub use redactor::CensorFn;
pub use stream::{StreamHandle, StreamSink};
pub use timer::TimerRegistry;
pub use timestamp::DateTimeFormat;
pub use type_key::{type_to_level, TypeDefinition};
