//! Logging macros for ergonomic message formatting.
//!
//! These macros format their arguments like `format!` and hand the result to
//! [`Logger::print`](crate::Logger::print) under a fixed tag.
//!
//! # Examples
//!
//! ```
//! use console_logger_system::prelude::*;
//! use console_logger_system::{info, log, success};
//!
//! let logger = Logger::builder().override_stream(true).build();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! success!(logger, "Listening on port {}", port);
//!
//! log!(logger, "fav", "{} stars", 5);
//! ```

/// Print a formatted message under any tag.
///
/// # Examples
///
/// ```
/// # use console_logger_system::prelude::*;
/// # let logger = Logger::builder().override_stream(true).build();
/// use console_logger_system::log;
/// log!(logger, "note", "Simple message");
/// log!(logger, "pending", "Job {} queued", 7);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $logger.print($tag, format!($($arg)+))
    };
}

/// Print a `debug` message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "debug", $($arg)+)
    };
}

/// Print an `info` message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "info", $($arg)+)
    };
}

/// Print a `warn` message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "warn", $($arg)+)
    };
}

/// Print an `error` message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "error", $($arg)+)
    };
}

/// Print a `success` message.
///
/// # Examples
///
/// ```
/// # use console_logger_system::prelude::*;
/// let sink = MemorySink::new();
/// let logger = Logger::builder().color(false).stream(sink.handle()).override_stream(true).build();
///
/// use console_logger_system::success;
/// success!(logger, "Built {} targets", 3);
/// assert!(sink.last().unwrap().ends_with("Built 3 targets"));
/// ```
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "success", $($arg)+)
    };
}
