//! Logging macros for ergonomic log message formatting.
//!
//! These macros wrap `format!` in a producer closure, so the formatting work
//! only happens when the logger's level lets the message through. Each
//! expands to the corresponding [`Logger`](crate::Logger) method and
//! evaluates to its `Result`.
//!
//! # Examples
//!
//! ```
//! use named_logger::prelude::*;
//! use named_logger::info;
//!
//! let registry = Registry::new();
//! let logger = registry.get_logger("server");
//! logger.set_level(Some(LogLevel::Info));
//!
//! // Basic logging
//! info!(logger, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Log a formatted message at the given level.
///
/// # Examples
///
/// ```
/// # use named_logger::prelude::*;
/// # let logger = Registry::new().get_logger("doc");
/// use named_logger::log;
/// log!(logger, LogLevel::Warn, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, || format!($($arg)+))
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use named_logger::prelude::*;
/// # let logger = Registry::new().get_logger("doc");
/// use named_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use named_logger::prelude::*;
/// # let logger = Registry::new().get_logger("doc");
/// # logger.set_level(Some(LogLevel::Trace));
/// use named_logger::trace;
/// trace!(logger, "Entering function: calculate()").unwrap();
/// trace!(logger, "Variable value: {}", 42).unwrap();
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}
