//! In-memory sink that captures every line it receives

use crate::core::{Level, Result, StreamHandle, StreamSink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Captured line with the name of the level it was printed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub level: String,
    pub text: String,
}

/// Sink that records lines instead of printing them.
///
/// Clones share the same buffer, so one clone can be handed to a logger
/// (via [`MemorySink::handle`]) while another is kept for inspection.
///
/// # Example
///
/// ```
/// use console_logger_system::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .stream(sink.handle())
///     .override_stream(true)
///     .build();
///
/// logger.print("success", "deployed");
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stream handle writing into this sink's buffer
    pub fn handle(&self) -> StreamHandle {
        StreamHandle::new(self.clone())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().iter().map(|l| l.text.clone()).collect()
    }

    pub fn entries(&self) -> Vec<CapturedLine> {
        self.lines.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.lock().last().map(|l| l.text.clone())
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl StreamSink for MemorySink {
    fn write(&mut self, level: &Level, text: &str) -> Result<()> {
        self.lines.lock().push(CapturedLine {
            level: level.name.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
