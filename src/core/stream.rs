//! Stream sink trait for log output destinations

use super::{error::Result, log_level::Level};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Destination for formatted log lines.
///
/// A sink receives exactly one `write` per print call it takes part in. The
/// line carries no trailing newline; line-oriented sinks add their own.
pub trait StreamSink: Send {
    fn write(&mut self, level: &Level, text: &str) -> Result<()>;
    fn name(&self) -> &str;
}

/// Shared handle to a sink.
///
/// Loggers derived with `copy` share the handles of their parent, so a sink
/// configured once keeps receiving output from every derived logger.
#[derive(Clone)]
pub struct StreamHandle {
    inner: Arc<Mutex<Box<dyn StreamSink>>>,
}

impl StreamHandle {
    pub fn new<S: StreamSink + 'static>(sink: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(sink))),
        }
    }

    pub fn write(&self, level: &Level, text: &str) -> Result<()> {
        self.inner.lock().write(level, text)
    }

    pub fn name(&self) -> String {
        self.inner.lock().name().to_string()
    }

    /// Whether both handles point at the same sink
    pub fn ptr_eq(&self, other: &StreamHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamHandle")
            .field("name", &self.name())
            .finish()
    }
}
