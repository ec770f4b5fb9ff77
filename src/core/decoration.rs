//! Decoration templates for rendered segments
//!
//! A [`Decoration`] wraps a piece of text in literal delimiters and optionally
//! uppercases, bolds or italicizes it. Styling is emitted as ANSI SGR codes and
//! only when the caller asks for color.

use serde::{Deserialize, Serialize};

const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Decoration {
    pub prefix: String,
    pub suffix: String,
    pub bold: bool,
    pub italic: bool,
    pub uppercase: bool,
}

impl Decoration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Template with literal delimiters and no styling
    #[must_use]
    pub fn wrapped(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    #[must_use]
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    #[must_use]
    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Delimiters and casing only, never any escape codes
    pub fn literal(&self, text: &str) -> String {
        let body = if self.uppercase {
            text.to_uppercase()
        } else {
            text.to_string()
        };
        format!("{}{}{}", self.prefix, body, self.suffix)
    }

    /// Full rendering. `foreground` is applied only when `color` is set.
    pub fn render(&self, text: &str, color: bool, foreground: Option<colored::Color>) -> String {
        let plain = self.literal(text);
        if !color {
            return plain;
        }

        let mut codes: Vec<String> = Vec::new();
        if self.bold {
            codes.push("1".to_string());
        }
        if self.italic {
            codes.push("3".to_string());
        }
        if let Some(fg) = foreground {
            codes.push(fg.to_fg_str().into_owned());
        }

        if codes.is_empty() {
            plain
        } else {
            format!("\x1b[{}m{}{}", codes.join(";"), plain, ANSI_RESET)
        }
    }
}

/// The full set of named templates a logger renders with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Decorations {
    pub datetime: Decoration,
    pub scope: Decoration,
    pub label: Decoration,
    pub message: Decoration,
    pub separator: Decoration,
    pub prefix: Decoration,
    pub suffix: Decoration,
    pub secret: Decoration,
}

impl Default for Decorations {
    fn default() -> Self {
        Self {
            datetime: Decoration::wrapped("[", "]"),
            scope: Decoration::wrapped("[", "]"),
            label: Decoration::new().with_bold(true),
            message: Decoration::new(),
            separator: Decoration::new(),
            prefix: Decoration::new(),
            suffix: Decoration::new(),
            secret: Decoration::wrapped("[", "]"),
        }
    }
}

impl Decorations {
    /// Shallow merge: each template present in `overrides` replaces ours whole
    #[must_use]
    pub fn merge(&self, overrides: &DecorationOverrides) -> Self {
        let pick = |own: &Decoration, other: &Option<Decoration>| {
            other.clone().unwrap_or_else(|| own.clone())
        };

        Self {
            datetime: pick(&self.datetime, &overrides.datetime),
            scope: pick(&self.scope, &overrides.scope),
            label: pick(&self.label, &overrides.label),
            message: pick(&self.message, &overrides.message),
            separator: pick(&self.separator, &overrides.separator),
            prefix: pick(&self.prefix, &overrides.prefix),
            suffix: pick(&self.suffix, &overrides.suffix),
            secret: pick(&self.secret, &overrides.secret),
        }
    }
}

/// Partial decorations used by `copy` and `settings`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationOverrides {
    pub datetime: Option<Decoration>,
    pub scope: Option<Decoration>,
    pub label: Option<Decoration>,
    pub message: Option<Decoration>,
    pub separator: Option<Decoration>,
    pub prefix: Option<Decoration>,
    pub suffix: Option<Decoration>,
    pub secret: Option<Decoration>,
}

impl DecorationOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn datetime(mut self, decoration: Decoration) -> Self {
        self.datetime = Some(decoration);
        self
    }

    #[must_use]
    pub fn scope(mut self, decoration: Decoration) -> Self {
        self.scope = Some(decoration);
        self
    }

    #[must_use]
    pub fn label(mut self, decoration: Decoration) -> Self {
        self.label = Some(decoration);
        self
    }

    #[must_use]
    pub fn message(mut self, decoration: Decoration) -> Self {
        self.message = Some(decoration);
        self
    }

    #[must_use]
    pub fn separator(mut self, decoration: Decoration) -> Self {
        self.separator = Some(decoration);
        self
    }

    #[must_use]
    pub fn prefix(mut self, decoration: Decoration) -> Self {
        self.prefix = Some(decoration);
        self
    }

    #[must_use]
    pub fn suffix(mut self, decoration: Decoration) -> Self {
        self.suffix = Some(decoration);
        self
    }

    #[must_use]
    pub fn secret(mut self, decoration: Decoration) -> Self {
        self.secret = Some(decoration);
        self
    }
}
