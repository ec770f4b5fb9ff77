//! Logger configuration
//!
//! [`LoggerConfig`] is the complete, immutable value a logger formats with.
//! [`LoggerOptions`] is a partial view of it: every field is optional and a
//! merge only touches the fields that are set. Values are resolved in the
//! order builtin default, then autodetected (environment), then explicit.

use super::decoration::Decorations;
use super::error::Result;
use super::log_level::{to_level, LogLevel};
use super::redactor::CensorFn;
use super::stream::StreamHandle;
use super::timestamp::DateTimeFormat;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

pub const ENV_NO_COLOR: &str = "NO_COLOR";
pub const ENV_LEVEL: &str = "CONSOLE_LOG_LEVEL";
pub const ENV_JSON: &str = "CONSOLE_LOG_JSON";
pub const ENV_DATETIME: &str = "CONSOLE_LOG_DATETIME";

pub const DEFAULT_SEPARATOR: &str = "›";

/// How a merge treats a supplied `scopes` list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeMerge {
    /// Supplied scopes replace the current ones (`copy`)
    Replace,
    /// Supplied scopes are appended to the current ones (`options`)
    Append,
}

#[derive(Clone)]
pub struct LoggerConfig {
    pub enabled: bool,
    pub color: bool,
    pub json: bool,
    /// Threshold; messages ranked below it are suppressed
    pub level: LogLevel,
    pub scopes: Vec<String>,
    /// Insertion-ordered, no duplicates
    pub secrets: Vec<String>,
    pub censor: Option<CensorFn>,
    pub datetime: DateTimeFormat,
    pub separator: String,
    /// Default prefix text when a print call supplies none
    pub prefix: Option<String>,
    /// Default suffix text when a print call supplies none
    pub suffix: Option<String>,
    pub decorations: Decorations,
    pub streams: Vec<StreamHandle>,
    /// When set, only `streams` receive output; otherwise the level's own
    /// console channel receives it too
    pub override_stream: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: true,
            json: false,
            level: LogLevel::Info,
            scopes: Vec::new(),
            secrets: Vec::new(),
            censor: None,
            datetime: DateTimeFormat::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            prefix: None,
            suffix: None,
            decorations: Decorations::default(),
            streams: Vec::new(),
            override_stream: false,
        }
    }
}

impl LoggerConfig {
    /// Apply every field set in `options` on top of this configuration
    #[must_use]
    pub fn merge(&self, options: &LoggerOptions, scopes: ScopeMerge) -> LoggerConfig {
        let mut merged = self.clone();

        if let Some(enabled) = options.enabled {
            merged.enabled = enabled;
        }
        if let Some(color) = options.color {
            merged.color = color;
        }
        if let Some(json) = options.json {
            merged.json = json;
        }
        if let Some(level) = options.level {
            merged.level = level;
        }
        if let Some(ref new_scopes) = options.scopes {
            match scopes {
                ScopeMerge::Replace => merged.scopes = new_scopes.clone(),
                ScopeMerge::Append => merged.scopes.extend(new_scopes.iter().cloned()),
            }
        }
        if let Some(ref secrets) = options.secrets {
            merged.secrets = dedup(secrets);
        }
        if let Some(ref censor) = options.censor {
            merged.censor = Some(Arc::clone(censor));
        }
        if let Some(ref datetime) = options.datetime {
            merged.datetime = datetime.clone();
        }
        if let Some(ref separator) = options.separator {
            merged.separator = separator.clone();
        }
        if let Some(ref prefix) = options.prefix {
            merged.prefix = Some(prefix.clone());
        }
        if let Some(ref suffix) = options.suffix {
            merged.suffix = Some(suffix.clone());
        }
        if let Some(ref streams) = options.streams {
            merged.streams = streams.clone();
        }
        if let Some(override_stream) = options.override_stream {
            merged.override_stream = override_stream;
        }

        merged
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("enabled", &self.enabled)
            .field("color", &self.color)
            .field("json", &self.json)
            .field("level", &self.level)
            .field("scopes", &self.scopes)
            .field("secrets", &self.secrets.len())
            .field("censor", &self.censor.is_some())
            .field("datetime", &self.datetime)
            .field("separator", &self.separator)
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("decorations", &self.decorations)
            .field("streams", &self.streams)
            .field("override_stream", &self.override_stream)
            .finish()
    }
}

fn dedup(values: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(value) {
            unique.push(value.clone());
        }
    }
    unique
}

/// Partial logger settings
///
/// # Examples
///
/// ```
/// use console_logger_system::core::{LoggerOptions, LogLevel};
///
/// let options = LoggerOptions::new()
///     .with_color(false)
///     .with_level(LogLevel::Debug)
///     .with_scopes(["api", "auth"]);
///
/// let parsed = LoggerOptions::from_json(r#"{"color": false, "level": "debug"}"#).unwrap();
/// assert_eq!(parsed.level, options.level);
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerOptions {
    pub enabled: Option<bool>,
    pub color: Option<bool>,
    pub json: Option<bool>,
    pub level: Option<LogLevel>,
    pub scopes: Option<Vec<String>>,
    pub secrets: Option<Vec<String>>,
    #[serde(skip)]
    pub censor: Option<CensorFn>,
    pub datetime: Option<DateTimeFormat>,
    pub separator: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    #[serde(skip)]
    pub streams: Option<Vec<StreamHandle>>,
    pub override_stream: Option<bool>,
}

impl LoggerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the data-only fields from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Settings detected from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Settings detected through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
            options.color = Some(false);
        }
        if let Some(level) = lookup(ENV_LEVEL) {
            options.level = Some(to_level(level.trim()));
        }
        if let Some(json) = lookup(ENV_JSON) {
            match json.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => options.json = Some(true),
                "0" | "false" | "no" | "off" => options.json = Some(false),
                _ => {}
            }
        }
        if let Some(datetime) = lookup(ENV_DATETIME) {
            options.datetime = Some(DateTimeFormat::from(datetime.trim()));
        }

        options
    }

    /// Field-wise union: values set on `self` win over `fallback`
    #[must_use]
    pub fn or(self, fallback: LoggerOptions) -> LoggerOptions {
        LoggerOptions {
            enabled: self.enabled.or(fallback.enabled),
            color: self.color.or(fallback.color),
            json: self.json.or(fallback.json),
            level: self.level.or(fallback.level),
            scopes: self.scopes.or(fallback.scopes),
            secrets: self.secrets.or(fallback.secrets),
            censor: self.censor.or(fallback.censor),
            datetime: self.datetime.or(fallback.datetime),
            separator: self.separator.or(fallback.separator),
            prefix: self.prefix.or(fallback.prefix),
            suffix: self.suffix.or(fallback.suffix),
            streams: self.streams.or(fallback.streams),
            override_stream: self.override_stream.or(fallback.override_stream),
        }
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = Some(json);
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_secrets<I, S>(mut self, secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.secrets = Some(secrets.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_censor<F>(mut self, censor: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.censor = Some(Arc::new(censor));
        self
    }

    #[must_use]
    pub fn with_datetime(mut self, datetime: impl Into<DateTimeFormat>) -> Self {
        self.datetime = Some(datetime.into());
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    #[must_use]
    pub fn with_streams<I>(mut self, streams: I) -> Self
    where
        I: IntoIterator<Item = StreamHandle>,
    {
        self.streams = Some(streams.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_override_stream(mut self, override_stream: bool) -> Self {
        self.override_stream = Some(override_stream);
        self
    }
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("enabled", &self.enabled)
            .field("color", &self.color)
            .field("json", &self.json)
            .field("level", &self.level)
            .field("scopes", &self.scopes)
            .field("secrets", &self.secrets.as_ref().map(Vec::len))
            .field("censor", &self.censor.is_some())
            .field("datetime", &self.datetime)
            .field("separator", &self.separator)
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("streams", &self.streams)
            .field("override_stream", &self.override_stream)
            .finish()
    }
}
