//! Custom output example
//!
//! Demonstrates isolated registries, a hand-written output and per-logger
//! output overrides.
//!
//! Run with: cargo run --example custom_output

use named_logger::prelude::*;
use std::fmt::Display;
use std::sync::Arc;

/// Prefixes each line with the level name
struct LevelPrefixOutput;

impl Output for LevelPrefixOutput {
    fn write(&self, logger: &str, level: LogLevel, message: &dyn Display) -> Result<()> {
        println!("{:5} {}", level.to_str(), ConsoleOutput::format_line(logger, message));
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Named Logger - Custom Output Example ===\n");

    let registry = Registry::builder()
        .default_level(LogLevel::Debug)
        .default_output(Arc::new(LevelPrefixOutput))
        .build();

    let api = registry.get_logger("api");
    api.info(|| "Request handled")?;
    api.debug(|| format!("Took {} ms", 12))?;

    println!("\nRouting one logger into memory:");
    let memory = Arc::new(MemoryOutput::new());
    let audit = registry.set_output("audit", Some(memory.clone()));
    audit.warn(|| "Password changed for user 7")?;
    audit.warn(|| "Token revoked")?;

    for record in memory.records() {
        println!("   captured {} {}: {}", record.level, record.logger, record.message);
    }

    println!("\nColoured console output:");
    registry.set_default_output(Arc::new(ConsoleOutput::with_colors(true)));
    api.error(|| "Upstream unavailable")?;
    api.info(|| "Retrying")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
