//! Sink over any `std::io::Write`

use crate::core::{Level, LoggerError, Result, StreamSink};
use std::io::Write;

/// Writes each line, newline-terminated, to a wrapped writer and flushes it
pub struct WriterSink<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name: "writer".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> StreamSink for WriterSink<W> {
    fn write(&mut self, _level: &Level, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)
            .and_then(|_| self.writer.flush())
            .map_err(|e| LoggerError::io_operation("writing log line", self.name.clone(), e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, StreamHandle};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_writes_lines_to_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.log");
        let file = fs::File::create(&path).expect("Failed to create file");

        let handle = StreamHandle::new(WriterSink::new(file).with_name("file"));
        assert_eq!(handle.name(), "file");
        handle
            .write(&LogLevel::Info.definition(), "one")
            .expect("write one");
        handle
            .write(&LogLevel::Error.definition(), "two")
            .expect("write two");

        let content = fs::read_to_string(&path).expect("Failed to read file");
        assert_eq!(content, "one\ntwo\n");
    }

    #[test]
    fn test_in_memory_writer() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write(&LogLevel::Info.definition(), "line").expect("write");
        assert_eq!(sink.into_inner(), b"line\n");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut sink = WriterSink::new(Broken).with_name("broken");
        let err = sink
            .write(&LogLevel::Info.definition(), "lost")
            .expect_err("write must fail");
        assert!(err.to_string().contains("broken"));
    }
}
