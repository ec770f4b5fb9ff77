//! Stream sink implementations

pub mod console;
pub mod memory;
pub mod writer;

pub use console::ConsoleSink;
pub use memory::{CapturedLine, MemorySink};
pub use writer::WriterSink;

// Re-export the trait for convenience
pub use crate::core::{StreamHandle, StreamSink};
