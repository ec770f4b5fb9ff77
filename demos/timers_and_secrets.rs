//! Timers, secret redaction and custom streams
//!
//! Run with: cargo run --example timers_and_secrets

use console_logger_system::prelude::*;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Console Logger System - Timers and Secrets Example ===\n");

    println!("1. Timers:");
    let mut logger = Logger::new();
    logger.start_timer(None);
    logger.start_timer(Some("download"));
    thread::sleep(Duration::from_millis(120));
    logger.end_timer(Some("download"));
    logger.end_timer(None);
    logger.end_timer(Some("never-started"));

    println!("\n2. Secrets:");
    let mut logger = logger.copy_with(
        &LoggerOptions::new().with_secrets(["hunter2", "s3cr3t"]),
        &DecorationOverrides::new(),
    );
    logger.print("warn", "login attempt with password HUNTER2");
    println!("   censor(): {}", logger.censor("token=s3cr3t"));

    let masked = logger.copy_with(
        &LoggerOptions::new().with_censor(|matched| "*".repeat(matched.len())),
        &DecorationOverrides::new(),
    );
    masked.print("warn", "login attempt with password hunter2");

    logger.unsecret();
    logger.print("info", "after unsecret: hunter2");

    println!("\n3. Custom streams:");
    let memory = MemorySink::new();
    let captured = Logger::builder()
        .color(false)
        .stream(memory.handle())
        .override_stream(true)
        .build();
    captured.print("success", "kept in memory");
    captured.print(
        "info",
        MessageRecord::new("also sent to stdout")
            .stream(StreamHandle::new(ConsoleSink::stdout()))
            .append_stream(true),
    );
    for line in memory.lines() {
        println!("   captured: {}", line);
    }

    let failing = Logger::builder()
        .stream(StreamHandle::new(WriterSink::new(Closed)))
        .override_stream(true)
        .build();
    if let Err(e) = failing.try_print("error", "nowhere to go") {
        println!("   try_print reported: {}", e);
    }
    println!(
        "   failed writes so far: {}",
        failing.metrics().failed_write_count()
    );

    println!("\n=== Example completed successfully! ===");
    Ok(())
}

struct Closed;

impl std::io::Write for Closed {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
