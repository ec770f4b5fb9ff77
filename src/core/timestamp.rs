//! Datetime segment formatting
//!
//! The datetime tag of a logger selects how (or whether) the moment of a print
//! call is rendered. Unknown tags are kept verbatim so they survive a
//! configuration round-trip; they render no segment at all.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Datetime rendering options
///
/// # Examples
///
/// ```
/// use console_logger_system::core::DateTimeFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2020, 6, 12, 9, 5, 0).single().unwrap();
/// assert_eq!(DateTimeFormat::Date.format(&at).as_deref(), Some("20-06-12"));
/// assert_eq!(DateTimeFormat::Time.format(&at).as_deref(), Some("09:05:00"));
/// assert_eq!("weekday".parse::<DateTimeFormat>().unwrap().format(&at), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateTimeFormat {
    /// Local time of day: `10:30:45`
    Time,

    /// Local date: `25-01-08`
    #[default]
    Date,

    /// Local date and time: `25-01-08 10:30:45`
    DateTime,

    /// Unix epoch in milliseconds: `1736332245123`
    Timestamp,

    /// Any other tag; no datetime segment is rendered
    Unrecognized(String),
}

impl DateTimeFormat {
    /// Render `datetime`, or `None` when this format omits the segment
    #[must_use]
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> Option<String>
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            DateTimeFormat::Time => Some(datetime.format("%H:%M:%S").to_string()),
            DateTimeFormat::Date => Some(datetime.format("%y-%m-%d").to_string()),
            DateTimeFormat::DateTime => Some(datetime.format("%y-%m-%d %H:%M:%S").to_string()),
            DateTimeFormat::Timestamp => Some(datetime.timestamp_millis().to_string()),
            DateTimeFormat::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, DateTimeFormat::Unrecognized(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            DateTimeFormat::Time => "time",
            DateTimeFormat::Date => "date",
            DateTimeFormat::DateTime => "datetime",
            DateTimeFormat::Timestamp => "timestamp",
            DateTimeFormat::Unrecognized(tag) => tag,
        }
    }
}

impl fmt::Display for DateTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateTimeFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "time" => DateTimeFormat::Time,
            "date" => DateTimeFormat::Date,
            "datetime" => DateTimeFormat::DateTime,
            "timestamp" => DateTimeFormat::Timestamp,
            _ => DateTimeFormat::Unrecognized(s.to_string()),
        })
    }
}

impl From<String> for DateTimeFormat {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(format) => format,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for DateTimeFormat {
    fn from(s: &str) -> Self {
        DateTimeFormat::from(s.to_string())
    }
}

impl From<DateTimeFormat> for String {
    fn from(format: DateTimeFormat) -> Self {
        format.as_str().to_string()
    }
}
