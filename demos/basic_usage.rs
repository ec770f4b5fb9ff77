//! Basic logger usage example
//!
//! Demonstrates tagged messages, thresholds, scopes and decorations.
//!
//! Run with: cargo run --example basic_usage

use console_logger_system::prelude::*;
use console_logger_system::{info, success};

fn main() -> Result<()> {
    println!("=== Console Logger System - Basic Usage Example ===\n");

    let mut logger = Logger::builder().level(LogLevel::Silly).build();

    println!("1. Printing every known tag:");
    for tag in console_logger_system::core::type_key::KNOWN_TYPES {
        logger.print(tag, format!("printed with the '{}' tag", tag));
    }

    println!("\n2. Raising the threshold to warn:");
    logger.options(LoggerOptions::new().with_level(LogLevel::Warn));
    logger.print("debug", "Debug message (hidden)");
    logger.print("info", "Info message (hidden)");
    logger.print("warn", "Warning message (visible)");
    logger.print("fatal", "Fatal message (visible)");

    println!("\n3. Scoped copies:");
    let api = logger.copy_with(
        &LoggerOptions::new()
            .with_level(LogLevel::Info)
            .with_scopes(["app", "api"]),
        &DecorationOverrides::new(),
    );
    info!(api, "Listening on port {}", 8080);
    success!(api, "Ready after {} ms", 42);

    println!("\n4. Custom parts and decorations:");
    let decorated = api.copy_with(
        &LoggerOptions::new().with_separator("|").with_datetime("time"),
        &DecorationOverrides::new()
            .prefix(Decoration::wrapped("(", ")").with_uppercase(true))
            .suffix(Decoration::wrapped("{", "}")),
    );
    decorated.print(
        "note",
        MessageRecord::new("custom parts")
            .label("release")
            .prefix("v2")
            .suffix("eu-west"),
    );

    println!("\n5. JSON output:");
    let json = api.copy_with(&LoggerOptions::new().with_json(true), &DecorationOverrides::new());
    json.print("error", "Connection refused");

    println!("\n6. Options from JSON:");
    let options = LoggerOptions::from_json(r#"{"color":false,"datetime":"datetime"}"#)?;
    api.copy_with(&options, &DecorationOverrides::new())
        .print("log", "Configured from a JSON document");

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
