//! Console output implementation

use crate::core::{LogLevel, Output, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::fmt::Display;
use std::io::Write;

/// Standard stream a console line goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes `[<logger>]: <message>` lines, `Error` to stderr and every other
/// level to stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsoleOutput {
    use_colors: bool,
}

impl ConsoleOutput {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    /// Colour whole lines by level. Ignored without the `console` feature.
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn format_line(logger: &str, message: &dyn Display) -> String {
        format!("[{}]: {}", logger, message)
    }

    fn target(level: LogLevel) -> Stream {
        match level {
            LogLevel::Error => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }

    #[cfg(feature = "console")]
    fn render(&self, logger: &str, level: LogLevel, message: &dyn Display) -> String {
        let line = Self::format_line(logger, message);
        if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line
        }
    }

    #[cfg(not(feature = "console"))]
    fn render(&self, logger: &str, _level: LogLevel, message: &dyn Display) -> String {
        Self::format_line(logger, message)
    }
}

impl Output for ConsoleOutput {
    fn write(&self, logger: &str, level: LogLevel, message: &dyn Display) -> Result<()> {
        let line = self.render(logger, level, message);

        match Self::target(level) {
            Stream::Stderr => write_line(&mut std::io::stderr().lock(), &line),
            Stream::Stdout => write_line(&mut std::io::stdout().lock(), &line),
        }
    }
}

/// IO failures (a closed pipe, a full disk) come back as `LoggerError::IoError`
fn write_line(out: &mut dyn Write, line: &str) -> Result<()> {
    writeln!(out, "{}", line)?;
    Ok(())
}
