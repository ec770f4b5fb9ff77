//! Log level definitions
//!
//! Six canonical severities share one total order. Lookups by name are total:
//! anything unrecognized becomes [`LogLevel::Info`].

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Silly = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    /// Highest rank; as a threshold it suppresses everything.
    Silent = 5,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Silly,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Silent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Silly => "silly",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Silent => "silent",
        }
    }

    #[inline]
    pub fn rank(&self) -> i32 {
        *self as i32
    }

    /// Channel a message of this level goes to when no stream overrides it
    pub fn channel(&self) -> OutputChannel {
        match self {
            LogLevel::Warn | LogLevel::Error => OutputChannel::Stderr,
            _ => OutputChannel::Stdout,
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Silly => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Silent => White,
        }
    }

    /// Full definition (name, rank, channel) of this level
    pub fn definition(&self) -> Level {
        Level::new(self.rank(), self.as_str(), self.channel())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silly" => Ok(LogLevel::Silly),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "silent" => Ok(LogLevel::Silent),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

/// Resolve a level name, falling back to `info` for anything unknown.
///
/// # Examples
///
/// ```
/// use console_logger_system::core::log_level::{to_level, LogLevel};
///
/// assert_eq!(to_level("ERROR"), LogLevel::Error);
/// assert_eq!(to_level("not_found"), LogLevel::Info);
/// assert_eq!(to_level(""), LogLevel::Info);
/// ```
pub fn to_level(name: &str) -> LogLevel {
    name.parse().unwrap_or_default()
}

/// Whether a message at `level` passes the `threshold`
#[inline]
pub fn should_emit(level: LogLevel, threshold: LogLevel) -> bool {
    level.rank() >= threshold.rank()
}

/// All canonical level definitions in rank order
pub fn levels() -> Vec<Level> {
    LogLevel::ALL.iter().map(LogLevel::definition).collect()
}

/// Standard process channel a level writes to by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputChannel {
    Stdout,
    Stderr,
}

impl OutputChannel {
    /// Write one line to the channel and flush it
    pub fn write_line(&self, text: &str) -> std::io::Result<()> {
        match self {
            OutputChannel::Stdout => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{}", text)?;
                out.flush()
            }
            OutputChannel::Stderr => {
                let mut err = std::io::stderr().lock();
                writeln!(err, "{}", text)?;
                err.flush()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputChannel::Stdout => "stdout",
            OutputChannel::Stderr => "stderr",
        }
    }
}

/// A named severity with its rank and default channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub rank: i32,
    pub channel: OutputChannel,
}

impl Level {
    pub fn new(rank: i32, name: impl Into<String>, channel: OutputChannel) -> Self {
        Self {
            name: name.into(),
            rank,
            channel,
        }
    }

    /// Same level bound to a different channel
    #[must_use]
    pub fn with_channel(&self, channel: OutputChannel) -> Self {
        Self {
            name: self.name.clone(),
            rank: self.rank,
            channel,
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        level.definition()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_level_table() {
        let cases = [
            ("error", LogLevel::Error),
            ("warn", LogLevel::Warn),
            ("info", LogLevel::Info),
            ("debug", LogLevel::Debug),
            ("silly", LogLevel::Silly),
            ("silent", LogLevel::Silent),
            ("not_found", LogLevel::Info),
            ("", LogLevel::Info),
        ];

        for (input, expected) in cases {
            let level = to_level(input);
            assert_eq!(level, expected, "input {:?}", input);
            assert_eq!(level.rank(), expected.rank());
        }
    }

    #[test]
    fn test_to_level_case_insensitive() {
        assert_eq!(to_level("ERROR"), to_level("error"));
        assert_eq!(to_level("Silent"), LogLevel::Silent);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert!("loud".parse::<LogLevel>().is_err());
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_silent_suppresses_everything() {
        for level in LogLevel::ALL.iter().take(5) {
            assert!(!should_emit(*level, LogLevel::Silent));
        }
        assert!(should_emit(LogLevel::Silly, LogLevel::Silly));
        assert!(!should_emit(LogLevel::Debug, LogLevel::Info));
        assert!(should_emit(LogLevel::Error, LogLevel::Warn));
    }

    #[test]
    fn test_levels_in_rank_order() {
        let all = levels();
        assert_eq!(all.len(), 6);
        assert!(all.windows(2).all(|w| w[0].rank < w[1].rank));
        assert_eq!(all.last().map(|l| l.name.as_str()), Some("silent"));
    }

    #[test]
    fn test_custom_level_with_channel() {
        let old = Level::new(-1, "custom", OutputChannel::Stdout);
        assert_eq!(old.rank, -1);
        assert_eq!(old.name, "custom");
        assert_eq!(old.channel, OutputChannel::Stdout);

        let moved = old.with_channel(OutputChannel::Stderr);
        assert_eq!(moved.rank, -1);
        assert_eq!(moved.name, "custom");
        assert_eq!(moved.channel, OutputChannel::Stderr);
    }

    #[test]
    fn test_default_channels() {
        assert_eq!(LogLevel::Error.channel(), OutputChannel::Stderr);
        assert_eq!(LogLevel::Warn.channel(), OutputChannel::Stderr);
        assert_eq!(LogLevel::Info.channel(), OutputChannel::Stdout);
    }
}
