//! Formatting pipeline
//!
//! Turns a type tag, a message input and a configuration into the final line.
//! An empty string means the message is suppressed: the logger is disabled or
//! the tag ranks below the threshold.
//!
//! Two output formats exist:
//! - Text: decorated, human-readable segments joined by the separator
//! - Json: one object with `timestamp`, `level`, `scopes`, `label`, `message`

use super::config::LoggerConfig;
use super::log_level::{should_emit, LogLevel};
use super::message::MessageInput;
use super::redactor;
use super::type_key::{self, type_to_level};
use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use std::fmt;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Decorated text format (default)
    ///
    /// Example: `[20-06-12] › ♥ favorite › hello world`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"timestamp":"20-06-12","level":"info","scopes":[],"label":"favorite","message":"hello world"}`
    Json,
}

impl OutputFormat {
    pub fn for_config(config: &LoggerConfig) -> Self {
        if config.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    fn format(&self, line: &Line<'_>, config: &LoggerConfig) -> String {
        match self {
            OutputFormat::Text => format_text(line, config),
            OutputFormat::Json => format_json(line),
        }
    }
}

/// A print call after normalization and redaction
struct Line<'a> {
    level: LogLevel,
    datetime: Option<String>,
    scopes: &'a [String],
    prefix: Option<&'a str>,
    badge: &'static str,
    label: String,
    message: String,
    suffix: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: Option<&'a str>,
    level: &'static str,
    scopes: &'a [String],
    label: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suffix: Option<&'a str>,
}

/// Format a print call as of now
pub fn build(tag: &str, input: &MessageInput, config: &LoggerConfig) -> String {
    build_at(tag, input, config, &Local::now())
}

/// Format a print call as of `now`
pub fn build_at<Tz: TimeZone>(
    tag: &str,
    input: &MessageInput,
    config: &LoggerConfig,
    now: &DateTime<Tz>,
) -> String
where
    Tz::Offset: fmt::Display,
{
    let level = type_to_level(tag);
    if !config.enabled || !should_emit(level, config.level) {
        return String::new();
    }

    let definition = type_key::lookup(tag);
    let label = match input.label() {
        Some(label) => label.to_string(),
        None => type_key::default_label(tag),
    };

    let message = redactor::censor(
        input.message(),
        &config.secrets,
        &config.decorations.secret,
        config.censor.as_ref(),
    );

    let line = Line {
        level,
        datetime: config.datetime.format(now),
        scopes: &config.scopes,
        prefix: input.prefix().or(config.prefix.as_deref()),
        badge: definition.map(|def| def.badge).unwrap_or(""),
        label,
        message,
        suffix: input.suffix().or(config.suffix.as_deref()),
    };

    OutputFormat::for_config(config).format(&line, config)
}

fn format_text(line: &Line<'_>, config: &LoggerConfig) -> String {
    let decorations = &config.decorations;
    let color = config.color;
    let level_color = Some(line.level.color_code());
    let mut segments: Vec<String> = Vec::with_capacity(6);

    if let Some(ref datetime) = line.datetime {
        segments.push(decorations.datetime.render(datetime, color, None));
    }

    let scopes = line
        .scopes
        .join(&format!(" {} ", decorations.separator.literal(&config.separator)));
    if !scopes.is_empty() {
        segments.push(decorations.scope.render(&scopes, color, None));
    }

    if let Some(prefix) = line.prefix.filter(|p| !p.is_empty()) {
        segments.push(decorations.prefix.render(prefix, color, None));
    }

    let badge = match (line.badge.is_empty(), color) {
        (true, _) => String::new(),
        (false, true) => colored_badge(line.badge, line.level),
        (false, false) => line.badge.to_string(),
    };
    let label = if line.label.is_empty() {
        String::new()
    } else {
        decorations.label.render(&line.label, color, level_color)
    };
    match (badge.is_empty(), label.is_empty()) {
        (true, true) => {}
        (false, true) => segments.push(badge),
        (true, false) => segments.push(label),
        (false, false) => segments.push(format!("{} {}", badge, label)),
    }

    if !line.message.is_empty() {
        segments.push(decorations.message.render(&line.message, color, None));
    }

    if let Some(suffix) = line.suffix.filter(|s| !s.is_empty()) {
        segments.push(decorations.suffix.render(suffix, color, None));
    }

    let separator = format!(
        " {} ",
        decorations.separator.render(&config.separator, color, None)
    );
    segments.join(&separator)
}

fn colored_badge(badge: &str, level: LogLevel) -> String {
    format!("\x1b[{}m{}\x1b[0m", level.color_code().to_fg_str(), badge)
}

fn format_json(line: &Line<'_>) -> String {
    let record = JsonRecord {
        timestamp: line.datetime.as_deref(),
        level: line.level.as_str(),
        scopes: line.scopes,
        label: &line.label,
        message: &line.message,
        prefix: line.prefix,
        suffix: line.suffix,
    };

    serde_json::to_string(&record).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{LoggerOptions, ScopeMerge};
    use crate::core::decoration::{Decoration, DecorationOverrides};
    use crate::core::message::MessageRecord;
    use crate::core::timestamp::DateTimeFormat;
    use chrono::Utc;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 6, 12, 8, 15, 30)
            .single()
            .expect("valid datetime")
    }

    fn config(options: LoggerOptions) -> LoggerConfig {
        LoggerConfig::default().merge(&options, ScopeMerge::Replace)
    }

    fn plain() -> LoggerConfig {
        config(LoggerOptions::new().with_color(false))
    }

    fn render(tag: &str, input: impl Into<MessageInput>, config: &LoggerConfig) -> String {
        build_at(tag, &input.into(), config, &fixed_now())
    }

    #[test]
    fn test_plain_text_layout() {
        let line = render("fav", "hello world", &plain());
        assert_eq!(line, "[20-06-12] › ♥ favorite › hello world");
    }

    #[test]
    fn test_unmapped_tag_labels_itself() {
        let line = render("deploy", "rolled out", &plain());
        assert_eq!(line, "[20-06-12] › deploy › rolled out");
    }

    #[test]
    fn test_scopes_prefix_suffix_order() {
        let config = config(
            LoggerOptions::new()
                .with_color(false)
                .with_scopes(["app", "db"])
                .with_datetime("none"),
        );
        let input = MessageRecord::new("connected").prefix("p").suffix("s");
        let line = render("log", input, &config);
        assert_eq!(line, "[app › db] › p › log › connected › s");
    }

    #[test]
    fn test_suppressed_below_threshold() {
        let config = config(LoggerOptions::new().with_level(LogLevel::Warn));
        assert_eq!(render("info", "hidden", &config), "");
        assert_ne!(render("warn", "shown", &config), "");
    }

    #[test]
    fn test_disabled_suppresses_everything() {
        let config = config(LoggerOptions::new().with_enabled(false));
        assert_eq!(render("fatal", "hidden", &config), "");
    }

    #[test]
    fn test_text_and_record_render_identically() {
        let config = plain();
        let a = render("note", "hello world", &config);
        let b = render("note", MessageRecord::new("hello world"), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let config = config(LoggerOptions::new().with_color(false).with_datetime("none"));

        assert_eq!(render("", "msg", &config), "msg");
        assert_eq!(render("log", MessageRecord::new("msg").prefix(""), &config), "log › msg");
        assert_eq!(render("log", MessageRecord::new("msg").suffix(""), &config), "log › msg");
        assert_eq!(render("fav", MessageRecord::new("msg").label(""), &config), "♥ › msg");
        assert_eq!(render("log", MessageRecord::new("msg").label(""), &config), "msg");
    }

    #[test]
    fn test_empty_tag_with_color_has_no_dangling_separator() {
        let config = config(LoggerOptions::new().with_datetime("none"));
        let line = render("", "msg", &config);
        assert_eq!(line, "msg");
    }

    #[test]
    fn test_custom_label_and_prefix_decoration() {
        let mut config = plain();
        config.decorations = config.decorations.merge(
            &DecorationOverrides::new().prefix(Decoration::wrapped("(", ")").with_uppercase(true)),
        );

        let line = render("stop", MessageRecord::new("custom").label("asdf").prefix("ald"), &config);
        assert!(line.contains("asdf"));
        assert!(line.contains("(ALD)"));
    }

    #[test]
    fn test_config_prefix_used_when_input_has_none() {
        let config = config(LoggerOptions::new().with_color(false).with_prefix("svc"));
        let line = render("info", "up", &config);
        assert!(line.contains(" › svc › "));

        let line = render("info", MessageRecord::new("up").prefix("own"), &config);
        assert!(line.contains(" › own › "));
        assert!(!line.contains("svc"));
    }

    #[test]
    fn test_no_escapes_without_color() {
        let config = plain();
        for tag in type_key::KNOWN_TYPES {
            let line = render(tag, "x", &config);
            assert!(!line.contains('\x1b'), "styled output for {}", tag);
        }
    }

    #[test]
    fn test_color_adds_styling() {
        let colored = config(LoggerOptions::new());
        let line = render("success", "done", &colored);
        assert!(line.contains('\x1b'));
        assert_ne!(line, render("success", "done", &plain()));
    }

    #[test]
    fn test_message_is_censored() {
        let config = config(LoggerOptions::new().with_color(false).with_secrets(["world"]));
        let line = render("note", "hello world", &config);
        assert!(line.ends_with("hello [secure]"));
    }

    #[test]
    fn test_datetime_formats_differ() {
        let formats = ["time", "date", "datetime", "timestamp", "unknown"];
        let lines: Vec<String> = formats
            .iter()
            .map(|f| render("note", "m", &config(LoggerOptions::new().with_datetime(*f))))
            .collect();

        for i in 0..lines.len() {
            for j in (i + 1)..lines.len() {
                assert_ne!(lines[i], lines[j], "{} vs {}", formats[i], formats[j]);
            }
        }
    }

    #[test]
    fn test_json_record() {
        let config = config(
            LoggerOptions::new()
                .with_json(true)
                .with_scopes(["api"])
                .with_datetime(DateTimeFormat::Time),
        );
        let line = render("fav", "hello world", &config);
        assert!(!line.contains('\x1b'));

        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid json");
        assert_eq!(parsed["timestamp"], "08:15:30");
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["scopes"][0], "api");
        assert_eq!(parsed["label"], "favorite");
        assert_eq!(parsed["message"], "hello world");
        assert!(parsed.get("prefix").is_none());
    }

    #[test]
    fn test_json_record_carries_prefix_and_suffix_when_set() {
        let config = config(LoggerOptions::new().with_json(true).with_suffix("eu"));
        let line = render("info", MessageRecord::new("up").prefix("v2"), &config);

        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid json");
        assert_eq!(parsed["prefix"], "v2");
        assert_eq!(parsed["suffix"], "eu");
    }

    #[test]
    fn test_json_unrecognized_datetime_is_null() {
        let config = config(LoggerOptions::new().with_json(true).with_datetime("never"));
        let parsed: serde_json::Value =
            serde_json::from_str(&render("info", "m", &config)).expect("valid json");
        assert!(parsed["timestamp"].is_null());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(OutputFormat::for_config(&plain()), OutputFormat::Text);
    }
}
