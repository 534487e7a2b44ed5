//! Named logger implementation

use super::{
    error::Result,
    log_level::LogLevel,
    output::SharedOutput,
    registry::Defaults,
};
use parking_lot::RwLock;
use std::fmt::{self, Display};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Stored in a level slot when no level has been set
pub(crate) const LEVEL_UNSET: u8 = u8::MAX;

pub(crate) fn load_level(slot: &AtomicU8) -> Option<LogLevel> {
    LogLevel::from_rank(slot.load(Ordering::Acquire))
}

pub(crate) fn store_level(slot: &AtomicU8, level: Option<LogLevel>) {
    slot.store(level.map_or(LEVEL_UNSET, LogLevel::rank), Ordering::Release);
}

/// A named logger with optional local level and output overrides.
///
/// Loggers are obtained from a [`Registry`](super::Registry) and live as long
/// as the registry holds them. Anything not set locally is read from the
/// registry defaults on every call, so changing a default is immediately
/// visible to every logger without an override.
///
/// Logging methods take a producer closure instead of a message. The closure
/// runs only when the level is enabled:
///
/// ```
/// use named_logger::prelude::*;
///
/// fn dump_routing_table() -> String {
///     unreachable!("debug is disabled")
/// }
///
/// let registry = Registry::new();
/// let logger = registry.get_logger("net");
/// logger.set_level(Some(LogLevel::Info));
///
/// logger.info(|| "connected").unwrap();
/// logger.debug(dump_routing_table).unwrap();
/// ```
pub struct Logger {
    name: String,
    level: AtomicU8,
    output: RwLock<Option<SharedOutput>>,
    defaults: Arc<Defaults>,
}

impl Logger {
    pub(crate) fn new(name: impl Into<String>, defaults: Arc<Defaults>) -> Self {
        Self {
            name: name.into(),
            level: AtomicU8::new(LEVEL_UNSET),
            output: RwLock::new(None),
            defaults,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Effective level: local, then the registry default, then `Warn`
    pub fn level(&self) -> LogLevel {
        self.local_level()
            .or_else(|| self.defaults.level())
            .unwrap_or_default()
    }

    pub fn local_level(&self) -> Option<LogLevel> {
        load_level(&self.level)
    }

    /// Set or clear the local level. `None` reverts to the registry default.
    pub fn set_level(&self, level: Option<LogLevel>) {
        store_level(&self.level, level);
    }

    pub fn is_local_level_set(&self) -> bool {
        self.local_level().is_some()
    }

    /// Effective output: local, then the registry default
    pub fn output(&self) -> SharedOutput {
        self.local_output()
            .unwrap_or_else(|| self.defaults.output())
    }

    pub fn local_output(&self) -> Option<SharedOutput> {
        self.output.read().clone()
    }

    /// Set or clear the local output. `None` reverts to the registry default.
    pub fn set_output(&self, output: Option<SharedOutput>) {
        // The old output may log from its Drop; release the lock first.
        let old = std::mem::replace(&mut *self.output.write(), output);
        drop(old);
    }

    pub fn is_local_output_set(&self) -> bool {
        self.output.read().is_some()
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.level().allows(level)
    }

    pub fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Fatal)
    }

    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Error)
    }

    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Warn)
    }

    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Info)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Debug)
    }

    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Trace)
    }

    /// Log the message built by `producer` if `level` is enabled.
    ///
    /// `producer` is called at most once, and only when the message will be
    /// written. A message at `LogLevel::None` passes every threshold,
    /// including `None` itself.
    ///
    /// # Errors
    ///
    /// Whatever the resolved [`Output`](super::Output) returns from its write
    /// is passed through unchanged.
    pub fn log<M, F>(&self, level: LogLevel, producer: F) -> Result<()>
    where
        M: Display,
        F: FnOnce() -> M,
    {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let message = producer();
        // Resolve after the producer runs: it may have changed the output.
        let output = self.output();
        output.write(&self.name, level, &message)
    }

    #[inline]
    pub fn fatal<M: Display>(&self, producer: impl FnOnce() -> M) -> Result<()> {
        self.log(LogLevel::Fatal, producer)
    }

    #[inline]
    pub fn error<M: Display>(&self, producer: impl FnOnce() -> M) -> Result<()> {
        self.log(LogLevel::Error, producer)
    }

    #[inline]
    pub fn warn<M: Display>(&self, producer: impl FnOnce() -> M) -> Result<()> {
        self.log(LogLevel::Warn, producer)
    }

    #[inline]
    pub fn info<M: Display>(&self, producer: impl FnOnce() -> M) -> Result<()> {
        self.log(LogLevel::Info, producer)
    }

    #[inline]
    pub fn debug<M: Display>(&self, producer: impl FnOnce() -> M) -> Result<()> {
        self.log(LogLevel::Debug, producer)
    }

    #[inline]
    pub fn trace<M: Display>(&self, producer: impl FnOnce() -> M) -> Result<()> {
        self.log(LogLevel::Trace, producer)
    }

    /// Log an already built message.
    #[deprecated(
        since = "0.1.0",
        note = "The message is built even when the level is disabled. Use `log(level, || msg)` instead"
    )]
    pub fn log_eager<M: Display>(&self, level: LogLevel, message: M) -> Result<()> {
        self.log(level, move || message)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("local_level", &self.local_level())
            .field("level", &self.level())
            .field("local_output", &self.is_local_output_set())
            .finish()
    }
}
