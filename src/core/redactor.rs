//! Secret redaction
//!
//! Secrets are matched case-insensitively, one after another in insertion
//! order. Text already replaced by an earlier secret is never searched again,
//! so a later secret cannot match inside an inserted placeholder.

use super::decoration::Decoration;
use regex::RegexBuilder;
use std::sync::Arc;

/// Word the secret template wraps when no custom censor is configured
pub const DEFAULT_PLACEHOLDER: &str = "secure";

/// Custom censor: receives the matched text (original casing), returns the body
pub type CensorFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

enum Piece<'a> {
    Original(&'a str),
    Replaced(String),
}

/// Replace every occurrence of every secret in `text`.
///
/// # Examples
///
/// ```
/// use console_logger_system::core::{redactor, Decoration};
///
/// let secrets = vec!["data".to_string()];
/// let template = Decoration::wrapped("[", "]");
/// assert_eq!(redactor::censor("new DATA", &secrets, &template, None), "new [secure]");
/// ```
pub fn censor(
    text: &str,
    secrets: &[String],
    template: &Decoration,
    custom: Option<&CensorFn>,
) -> String {
    if secrets.is_empty() || text.is_empty() {
        return text.to_string();
    }

    let mut pieces = vec![Piece::Original(text)];

    for secret in secrets.iter().filter(|s| !s.is_empty()) {
        let pattern = match RegexBuilder::new(&regex::escape(secret))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            Err(_) => continue,
        };

        let mut next = Vec::with_capacity(pieces.len());
        for piece in pieces {
            let chunk = match piece {
                Piece::Original(chunk) => chunk,
                replaced => {
                    next.push(replaced);
                    continue;
                }
            };

            let mut last = 0;
            for found in pattern.find_iter(chunk) {
                if found.start() > last {
                    next.push(Piece::Original(&chunk[last..found.start()]));
                }
                next.push(Piece::Replaced(replacement(found.as_str(), template, custom)));
                last = found.end();
            }
            if last < chunk.len() {
                next.push(Piece::Original(&chunk[last..]));
            }
        }
        pieces = next;
    }

    pieces
        .into_iter()
        .map(|piece| match piece {
            Piece::Original(chunk) => chunk.to_string(),
            Piece::Replaced(mask) => mask,
        })
        .collect()
}

fn replacement(matched: &str, template: &Decoration, custom: Option<&CensorFn>) -> String {
    match custom {
        Some(censor_fn) => format!("{}{}{}", template.prefix, censor_fn(matched), template.suffix),
        None => template.literal(DEFAULT_PLACEHOLDER),
    }
}
