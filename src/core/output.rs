//! Output trait for log destinations

use super::{error::Result, log_level::LogLevel};
use std::fmt::Display;
use std::sync::Arc;

/// A sink receiving every message a logger decided to emit.
///
/// `write` is called outside of any registry or logger lock, so an output is
/// free to block, or to log through another logger. Errors are handed back
/// to whoever called the logging method; the facade never swallows or
/// retries them.
pub trait Output: Send + Sync {
    fn write(&self, logger: &str, level: LogLevel, message: &dyn Display) -> Result<()>;
}

/// Outputs are shared between the registry defaults and any number of loggers
pub type SharedOutput = Arc<dyn Output>;

impl<F> Output for F
where
    F: Fn(&str, LogLevel, &dyn Display) -> Result<()> + Send + Sync,
{
    fn write(&self, logger: &str, level: LogLevel, message: &dyn Display) -> Result<()> {
        self(logger, level, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use parking_lot::Mutex;

    #[test]
    fn test_closure_output() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let output = move |logger: &str, level: LogLevel, message: &dyn Display| -> Result<()> {
            sink.lock().push(format!("{} {} {}", logger, level, message));
            Ok(())
        };

        output.write("db", LogLevel::Info, &"connected").unwrap();
        output.write("db", LogLevel::Error, &42).unwrap();

        assert_eq!(*seen.lock(), vec!["db INFO connected", "db ERROR 42"]);
    }

    #[test]
    fn test_closure_output_error() {
        let output = |_: &str, _: LogLevel, _: &dyn Display| -> Result<()> {
            Err(LoggerError::writer("full"))
        };
        let shared: SharedOutput = Arc::new(output);

        let err = shared.write("db", LogLevel::Warn, &"x").unwrap_err();
        assert!(matches!(err, LoggerError::WriterError(_)));
    }
}
