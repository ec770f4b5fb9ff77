//! Console sink implementation

use crate::core::{Level, LoggerError, OutputChannel, Result, StreamSink};

/// Writes lines to stdout/stderr.
///
/// By default the channel follows the level of each line (warn and error to
/// stderr, the rest to stdout). It can also be pinned to one channel.
pub struct ConsoleSink {
    channel: Option<OutputChannel>,
}

impl ConsoleSink {
    /// Route each line by its level
    pub fn new() -> Self {
        Self { channel: None }
    }

    pub fn stdout() -> Self {
        Self {
            channel: Some(OutputChannel::Stdout),
        }
    }

    pub fn stderr() -> Self {
        Self {
            channel: Some(OutputChannel::Stderr),
        }
    }

    /// Channel a line at `level` is written to
    pub fn channel_for(&self, level: &Level) -> OutputChannel {
        self.channel.unwrap_or(level.channel)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamSink for ConsoleSink {
    fn write(&mut self, level: &Level, text: &str) -> Result<()> {
        let channel = self.channel_for(level);
        channel.write_line(text).map_err(|e| {
            LoggerError::io_operation(format!("writing to {}", channel.as_str()), "console sink", e)
        })
    }

    fn name(&self) -> &str {
        match self.channel {
            None => "console",
            Some(OutputChannel::Stdout) => "stdout",
            Some(OutputChannel::Stderr) => "stderr",
        }
    }
}
