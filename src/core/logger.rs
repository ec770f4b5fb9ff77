//! Main logger implementation
//!
//! A [`Logger`] owns its configuration, its timers and its metrics. Two APIs
//! change configuration and they behave differently on purpose:
//! - `copy` / `copy_with` return a new, independent logger (scopes replace)
//! - `options`, `settings`, `color`, `uncolor`, `unscope` and `unsecret`
//!   change the receiver in place and return it for chaining (scopes append)

use super::{
    config::{LoggerConfig, LoggerOptions, ScopeMerge},
    decoration::DecorationOverrides,
    error::{LoggerError, Result},
    formatter,
    log_level::{self, Level, LogLevel, OutputChannel},
    message::{MessageInput, MessageRecord},
    metrics::LoggerMetrics,
    redactor,
    stream::StreamHandle,
    timer::{format_elapsed, TimerRegistry},
    type_key::type_to_level,
};
use parking_lot::Mutex;
use std::sync::OnceLock;

/// Tag used for the line printed when a timer starts
pub const TIMER_START_TAG: &str = "start";
/// Tag used for the line printed when a timer ends
pub const TIMER_END_TAG: &str = "complete";

static DEFAULT_LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Process-wide logger with builtin defaults, created on first access
pub fn default_logger() -> &'static Mutex<Logger> {
    DEFAULT_LOGGER.get_or_init(|| Mutex::new(Logger::new()))
}

/// Where one formatted line goes
enum Target<'a> {
    Console(OutputChannel),
    Stream(&'a StreamHandle),
}

#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
    timers: TimerRegistry,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger with builtin defaults only
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    /// Logger resolved as default, then environment, then `options`
    #[must_use]
    pub fn with_options(options: LoggerOptions) -> Self {
        let resolved = options.or(LoggerOptions::from_env());
        Self::from_config(LoggerConfig::default().merge(&resolved, ScopeMerge::Replace))
    }

    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            timers: TimerRegistry::new(),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Independent logger with the same configuration and no timers
    #[must_use]
    pub fn copy(&self) -> Logger {
        Self::from_config(self.config.clone())
    }

    /// Independent logger with `settings` and `decorations` merged over ours.
    /// A `scopes` list in `settings` replaces the current scopes.
    #[must_use]
    pub fn copy_with(&self, settings: &LoggerOptions, decorations: &DecorationOverrides) -> Logger {
        let mut config = self.config.merge(settings, ScopeMerge::Replace);
        config.decorations = config.decorations.merge(decorations);
        Self::from_config(config)
    }

    /// Merge `options` into this logger. A `scopes` list is appended.
    pub fn options(&mut self, options: LoggerOptions) -> &mut Self {
        self.config = self.config.merge(&options, ScopeMerge::Append);
        self
    }

    /// Merge decoration templates into this logger
    pub fn settings(&mut self, decorations: DecorationOverrides) -> &mut Self {
        self.config.decorations = self.config.decorations.merge(&decorations);
        self
    }

    pub fn color(&mut self) -> &mut Self {
        self.config.color = true;
        self
    }

    pub fn uncolor(&mut self) -> &mut Self {
        self.config.color = false;
        self
    }

    pub fn unscope(&mut self) -> &mut Self {
        self.config.scopes.clear();
        self
    }

    pub fn unsecret(&mut self) -> &mut Self {
        self.config.secrets.clear();
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn is_color(&self) -> bool {
        self.config.color
    }

    pub fn is_json(&self) -> bool {
        self.config.json
    }

    /// Current threshold
    pub fn level(&self) -> LogLevel {
        self.config.level
    }

    pub fn scopes(&self) -> &[String] {
        &self.config.scopes
    }

    pub fn secrets(&self) -> &[String] {
        &self.config.secrets
    }

    /// All known level definitions in rank order
    pub fn levels(&self) -> Vec<Level> {
        log_level::levels()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Number of timers started and not yet ended
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Redact the configured secrets from `text`
    pub fn censor(&self, text: &str) -> String {
        redactor::censor(
            text,
            &self.config.secrets,
            &self.config.decorations.secret,
            self.config.censor.as_ref(),
        )
    }

    /// Format without writing. Returns `""` when the line would be suppressed.
    pub fn build(&self, tag: &str, input: impl Into<MessageInput>) -> String {
        formatter::build(tag, &input.into(), &self.config)
    }

    /// Format and write to every active stream.
    ///
    /// Stream failures are reported on stderr and counted in the metrics;
    /// the remaining streams still receive the line.
    pub fn print(&self, tag: &str, input: impl Into<MessageInput>) {
        for error in self.emit(tag, &input.into()) {
            eprintln!("[LOGGER ERROR] {}", error);
        }
    }

    /// Like [`print`](Self::print) but hands the first stream failure back
    pub fn try_print(&self, tag: &str, input: impl Into<MessageInput>) -> Result<()> {
        match self.emit(tag, &input.into()).into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Start a timer and print its label. Without a label `timer_N` is used.
    pub fn start_timer(&mut self, label: Option<&str>) {
        let label = self.timers.start(label);
        self.print(
            TIMER_START_TAG,
            MessageRecord::new("Initialized timer...").label(label),
        );
    }

    /// End a timer and print its label with the elapsed time.
    /// Does nothing when no such timer is running.
    pub fn end_timer(&mut self, label: Option<&str>) {
        if let Some((label, elapsed)) = self.timers.end(label) {
            let message = format!("Timer run for: {}", format_elapsed(elapsed));
            self.print(TIMER_END_TAG, MessageRecord::new(message).label(label));
        }
    }

    fn emit(&self, tag: &str, input: &MessageInput) -> Vec<LoggerError> {
        let line = formatter::build(tag, input, &self.config);
        if line.is_empty() {
            self.metrics.record_suppressed();
            return Vec::new();
        }

        let level = type_to_level(tag).definition();
        let mut errors = Vec::new();
        for target in self.targets(&level, input) {
            let result = match target {
                Target::Console(channel) => channel.write_line(&line).map_err(|e| {
                    LoggerError::io_operation(
                        format!("writing to {}", channel.as_str()),
                        "console channel",
                        e,
                    )
                }),
                Target::Stream(stream) => stream.write(&level, &line),
            };

            if let Err(error) = result {
                self.metrics.record_failed_write();
                errors.push(error);
            }
        }

        self.metrics.record_printed();
        errors
    }

    /// Active targets for one print call, in write order
    fn targets<'a>(&'a self, level: &Level, input: &'a MessageInput) -> Vec<Target<'a>> {
        let mut targets = Vec::with_capacity(self.config.streams.len() + 2);

        match input.stream() {
            Some(stream) if !input.append_stream() => {
                targets.push(Target::Stream(stream));
                return targets;
            }
            _ => {}
        }

        if !self.config.override_stream {
            targets.push(Target::Console(level.channel));
        }
        targets.extend(self.config.streams.iter().map(Target::Stream));
        if let Some(stream) = input.stream() {
            targets.push(Target::Stream(stream));
        }

        targets
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for Logger
///
/// # Example
///
/// ```
/// use console_logger_system::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .scope("api")
///     .secret("hunter2")
///     .color(false)
///     .build();
///
/// assert_eq!(logger.scopes(), ["api"]);
/// assert_eq!(logger.censor("pw hunter2"), "pw [secure]");
/// ```
pub struct LoggerBuilder {
    options: LoggerOptions,
    decorations: DecorationOverrides,
    scopes: Vec<String>,
    secrets: Vec<String>,
    streams: Vec<StreamHandle>,
    detect_env: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            options: LoggerOptions::new(),
            decorations: DecorationOverrides::new(),
            scopes: Vec::new(),
            secrets: Vec::new(),
            streams: Vec::new(),
            detect_env: false,
        }
    }

    /// Set the threshold level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.options.level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.options.enabled = Some(enabled);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, color: bool) -> Self {
        self.options.color = Some(color);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn json(mut self, json: bool) -> Self {
        self.options.json = Some(json);
        self
    }

    /// Append a scope
    #[must_use = "builder methods return a new value"]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Add a secret to redact
    #[must_use = "builder methods return a new value"]
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secrets.push(secret.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn censor<F>(mut self, censor: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.options = self.options.with_censor(censor);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn datetime(mut self, datetime: impl Into<super::timestamp::DateTimeFormat>) -> Self {
        self.options.datetime = Some(datetime.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.options.separator = Some(separator.into());
        self
    }

    /// Add an output stream
    #[must_use = "builder methods return a new value"]
    pub fn stream(mut self, stream: StreamHandle) -> Self {
        self.streams.push(stream);
        self
    }

    /// Write only to the added streams, not to the console channels
    #[must_use = "builder methods return a new value"]
    pub fn override_stream(mut self, override_stream: bool) -> Self {
        self.options.override_stream = Some(override_stream);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn decorations(mut self, decorations: DecorationOverrides) -> Self {
        self.decorations = decorations;
        self
    }

    /// Fill unset values from the environment (`NO_COLOR`, `CONSOLE_LOG_*`)
    #[must_use = "builder methods return a new value"]
    pub fn detect_env(mut self, detect: bool) -> Self {
        self.detect_env = detect;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut options = self.options;
        if !self.scopes.is_empty() {
            options.scopes = Some(self.scopes);
        }
        if !self.secrets.is_empty() {
            options.secrets = Some(self.secrets);
        }
        if !self.streams.is_empty() {
            options.streams = Some(self.streams);
        }
        if self.detect_env {
            options = options.or(LoggerOptions::from_env());
        }

        let mut config = LoggerConfig::default().merge(&options, ScopeMerge::Replace);
        config.decorations = config.decorations.merge(&self.decorations);
        Logger::from_config(config)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
