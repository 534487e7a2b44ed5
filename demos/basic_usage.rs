//! Basic logger usage example
//!
//! Demonstrates named loggers on the global registry, per-logger levels and
//! lazily built messages.
//!
//! Run with: cargo run --example basic_usage

use named_logger::prelude::*;
use named_logger::info;

fn main() -> Result<()> {
    println!("=== Named Logger - Basic Usage Example ===\n");

    let net = named_logger::get_logger("net");

    // Default threshold is WARN
    println!("1. Logging with the default WARN threshold:");
    net.fatal(|| "This is a fatal message")?;
    net.error(|| "This is an error message (stderr)")?;
    net.warn(|| "This is a warning message")?;
    net.info(|| "Info message (hidden)")?;

    println!("\n2. Raising one logger to TRACE:");
    named_logger::set_level("net", Some(LogLevel::Trace));
    net.debug(|| "This is a debug message")?;
    net.trace(|| "This is a trace message")?;

    println!("\n3. Other loggers keep following the default:");
    let db = named_logger::get_logger("db");
    db.info(|| "Info message (hidden)")?;
    named_logger::set_default_level(Some(LogLevel::Info));
    info!(db, "Pool size: {}", 8)?;

    println!("\n4. Messages are only built when they will be written:");
    db.debug(|| {
        println!("   (never printed)");
        "expensive dump"
    })?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
