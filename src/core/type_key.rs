//! Message type tags
//!
//! Each print call carries a short tag such as `success` or `wait`. The tag
//! picks the severity, the default label and a badge glyph.

use super::log_level::LogLevel;

/// Static description of a known tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDefinition {
    pub level: LogLevel,
    pub label: &'static str,
    pub badge: &'static str,
}

impl TypeDefinition {
    const fn new(level: LogLevel, label: &'static str, badge: &'static str) -> Self {
        Self { level, label, badge }
    }
}

/// Every tag with a dedicated entry, in display order
pub const KNOWN_TYPES: [&str; 19] = [
    "silly", "debug", "wait", "await", "pending", "watch", "info", "log", "note", "fav", "star",
    "success", "complete", "start", "stop", "pause", "warn", "error", "fatal",
];

/// Look up the table entry for a tag. Matching is case-insensitive.
pub fn lookup(tag: &str) -> Option<TypeDefinition> {
    use LogLevel::*;
    let def = match tag.to_lowercase().as_str() {
        "silly" => TypeDefinition::new(Silly, "silly", "◌"),
        "debug" => TypeDefinition::new(Debug, "debug", "⬤"),
        "wait" => TypeDefinition::new(Debug, "waiting", "…"),
        "await" => TypeDefinition::new(Debug, "awaiting", "…"),
        "pending" => TypeDefinition::new(Debug, "pending", "☐"),
        "watch" => TypeDefinition::new(Debug, "watching", "…"),
        "info" => TypeDefinition::new(Info, "info", "ℹ"),
        "log" => TypeDefinition::new(Info, "log", ""),
        "note" => TypeDefinition::new(Info, "note", "●"),
        "fav" => TypeDefinition::new(Info, "favorite", "♥"),
        "star" => TypeDefinition::new(Info, "star", "★"),
        "success" => TypeDefinition::new(Info, "success", "✔"),
        "complete" => TypeDefinition::new(Info, "complete", "☑"),
        "start" => TypeDefinition::new(Info, "start", "▶"),
        "stop" => TypeDefinition::new(Info, "stop", "■"),
        "pause" => TypeDefinition::new(Info, "pause", "‖"),
        "warn" => TypeDefinition::new(Warn, "warning", "⚠"),
        "error" => TypeDefinition::new(Error, "error", "✖"),
        "fatal" => TypeDefinition::new(Error, "fatal", "✖"),
        _ => return None,
    };
    Some(def)
}

/// Severity of a tag; unmapped and empty tags are `info`
pub fn type_to_level(tag: &str) -> LogLevel {
    lookup(tag).map(|def| def.level).unwrap_or_default()
}

/// Default label of a tag; unmapped tags label themselves
pub fn default_label(tag: &str) -> String {
    match lookup(tag) {
        Some(def) => def.label.to_string(),
        None => tag.to_string(),
    }
}
