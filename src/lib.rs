//! # Console Logger System
//!
//! A structured console logger: severity-gated printing, decorated output,
//! secret redaction, multi-stream dispatch and named timers.
//!
//! ## Features
//!
//! - **Tagged Messages**: `success`, `wait`, `fatal`... each tag maps to a level, label and badge
//! - **Copy or Mutate**: derive independent loggers or adjust one in place
//! - **Redaction**: secrets are masked before anything reaches a stream
//! - **Streams**: level-routed console output plus any number of custom sinks
//!
//! ```
//! use console_logger_system::prelude::*;
//!
//! let sink = MemorySink::new();
//! let mut logger = Logger::builder()
//!     .color(false)
//!     .secret("hunter2")
//!     .stream(sink.handle())
//!     .override_stream(true)
//!     .build();
//!
//! logger.print("success", "logged in with hunter2");
//! assert!(sink.last().unwrap().ends_with("logged in with [secure]"));
//!
//! logger.start_timer(Some("deploy"));
//! logger.end_timer(Some("deploy"));
//! assert_eq!(sink.len(), 3);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleSink, MemorySink, WriterSink};
    pub use crate::core::{
        default_logger, to_level, type_to_level, CensorFn, DateTimeFormat, Decoration,
        DecorationOverrides, Decorations, Level, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, LoggerOptions, MessageInput, MessageRecord, OutputChannel,
        Result, StreamHandle, StreamSink,
    };
}

pub use crate::appenders::{ConsoleSink, MemorySink, WriterSink};
pub use crate::core::{
    default_logger, levels, should_emit, to_level, type_to_level, CensorFn, DateTimeFormat,
    Decoration, DecorationOverrides, Decorations, Level, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, LoggerOptions, MessageInput, MessageRecord,
    OutputChannel, OutputFormat, Result, ScopeMerge, StreamHandle, StreamSink, TimerRegistry,
    TypeDefinition,
};
