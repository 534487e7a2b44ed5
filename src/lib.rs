//! # Named Logger
//!
//! A small logging facade: named loggers with independent severity
//! thresholds, lazily built messages and a pluggable output.
//!
//! ## Features
//!
//! - **Named Loggers**: One shared instance per name, created on first use
//! - **Lazy Messages**: Producers run only when the level is enabled
//! - **Live Defaults**: Registry-wide level and output, read on every call
//! - **Pluggable Output**: Console by default, any [`Output`] on demand
//!
//! ```
//! use named_logger::prelude::*;
//!
//! let logger = named_logger::get_logger("app");
//! logger.warn(|| "disk almost full").unwrap();
//! ```

use std::sync::Arc;

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{CapturedRecord, ConsoleOutput, MemoryOutput};
    pub use crate::core::{
        LogLevel, Logger, LoggerError, Output, Registry, RegistryBuilder, Result, SharedOutput,
    };
}

pub use crate::appenders::{CapturedRecord, ConsoleOutput, MemoryOutput};
pub use crate::core::{
    LogLevel, Logger, LoggerError, Output, Registry, RegistryBuilder, Result, SharedOutput,
};

/// Logger `name` from the process-wide registry
pub fn get_logger(name: &str) -> Arc<Logger> {
    Registry::global().get_logger(name)
}

pub fn set_level(name: &str, level: Option<LogLevel>) -> Arc<Logger> {
    Registry::global().set_level(name, level)
}

pub fn set_output(name: &str, output: Option<SharedOutput>) -> Arc<Logger> {
    Registry::global().set_output(name, output)
}

pub fn default_level() -> Option<LogLevel> {
    Registry::global().default_level()
}

pub fn set_default_level(level: Option<LogLevel>) {
    Registry::global().set_default_level(level);
}

pub fn default_output() -> SharedOutput {
    Registry::global().default_output()
}

pub fn set_default_output(output: SharedOutput) {
    Registry::global().set_default_output(output);
}
