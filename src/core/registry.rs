//! Process-wide logger registry and its defaults

use super::{
    log_level::LogLevel,
    logger::{load_level, store_level, Logger, LEVEL_UNSET},
    output::SharedOutput,
};
use crate::appenders::ConsoleOutput;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::AtomicU8;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Fallback level and output shared by every logger of a registry.
pub(crate) struct Defaults {
    level: AtomicU8,
    output: RwLock<SharedOutput>,
}

impl Defaults {
    fn new(level: Option<LogLevel>, output: SharedOutput) -> Self {
        let defaults = Self {
            level: AtomicU8::new(LEVEL_UNSET),
            output: RwLock::new(output),
        };
        store_level(&defaults.level, level);
        defaults
    }

    pub(crate) fn level(&self) -> Option<LogLevel> {
        load_level(&self.level)
    }

    pub(crate) fn output(&self) -> SharedOutput {
        Arc::clone(&self.output.read())
    }
}

/// Mapping from logger name to [`Logger`], plus the defaults loggers fall
/// back to.
///
/// Most programs use the process-wide instance through [`Registry::global`]
/// or the free functions in the crate root. Tests and embedders can build an
/// isolated registry with [`Registry::new`] or [`Registry::builder`].
///
/// # Shared registry support
///
/// Some targets cannot mutate shared global state. A registry built with
/// `shared_registry(false)` never stores loggers: every `get_logger` call
/// returns a fresh, unregistered logger. Such loggers still read the
/// registry defaults, but a local level or output set on one of them is not
/// seen by the next lookup of the same name. This is a per-platform policy.
pub struct Registry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
    defaults: Arc<Defaults>,
    shared: bool,
}

impl Registry {
    /// Empty registry with no default level (effective `Warn`) and console
    /// output
    #[must_use]
    pub fn new() -> Self {
        RegistryBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The process-wide registry, created on first use and never torn down
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Return the logger registered under `name`, creating it on first use.
    ///
    /// Concurrent callers asking for the same unseen name all receive the
    /// same instance.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        if !self.shared {
            return Arc::new(Logger::new(name, Arc::clone(&self.defaults)));
        }

        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        let logger = loggers
            .entry(name.to_owned())
            .or_insert_with(|| Arc::new(Logger::new(name, Arc::clone(&self.defaults))));
        Arc::clone(logger)
    }

    /// Shorthand for `get_logger(name).set_level(level)`
    pub fn set_level(&self, name: &str, level: Option<LogLevel>) -> Arc<Logger> {
        let logger = self.get_logger(name);
        logger.set_level(level);
        logger
    }

    /// Shorthand for `get_logger(name).set_output(output)`
    pub fn set_output(&self, name: &str, output: Option<SharedOutput>) -> Arc<Logger> {
        let logger = self.get_logger(name);
        logger.set_output(output);
        logger
    }

    pub fn default_level(&self) -> Option<LogLevel> {
        self.defaults.level()
    }

    /// Takes effect for every logger without a local level, including ones
    /// already handed out.
    pub fn set_default_level(&self, level: Option<LogLevel>) {
        store_level(&self.defaults.level, level);
    }

    pub fn default_output(&self) -> SharedOutput {
        self.defaults.output()
    }

    /// Takes effect for every logger without a local output, including ones
    /// already handed out.
    pub fn set_default_output(&self, output: SharedOutput) {
        // The old output may log from its Drop; release the lock first.
        let old = std::mem::replace(&mut *self.defaults.output.write(), output);
        drop(old);
    }

    pub fn supports_shared_registry(&self) -> bool {
        self.shared
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Sorted snapshot of registered logger names
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("loggers", &self.logger_names())
            .field("default_level", &self.default_level())
            .field("shared", &self.shared)
            .finish()
    }
}

/// Builder for [`Registry`]
///
/// # Example
///
/// ```
/// use named_logger::prelude::*;
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemoryOutput::new());
/// let registry = Registry::builder()
///     .default_level(LogLevel::Info)
///     .default_output(memory.clone())
///     .build();
///
/// registry.get_logger("app").info(|| "ready").unwrap();
/// assert_eq!(memory.messages(), vec!["ready"]);
/// ```
pub struct RegistryBuilder {
    default_level: Option<LogLevel>,
    default_output: Option<SharedOutput>,
    shared: bool,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            default_level: None,
            default_output: None,
            shared: true,
        }
    }

    /// Set the default level. Without it loggers fall back to `Warn`.
    #[must_use = "builder methods return a new value"]
    pub fn default_level(mut self, level: LogLevel) -> Self {
        self.default_level = Some(level);
        self
    }

    /// Set the default output. Without it loggers write to the console.
    #[must_use = "builder methods return a new value"]
    pub fn default_output(mut self, output: SharedOutput) -> Self {
        self.default_output = Some(output);
        self
    }

    /// Whether loggers are stored and shared by name. Defaults to `true`.
    #[must_use = "builder methods return a new value"]
    pub fn shared_registry(mut self, shared: bool) -> Self {
        self.shared = shared;
        self
    }

    pub fn build(self) -> Registry {
        let output = self
            .default_output
            .unwrap_or_else(|| Arc::new(ConsoleOutput::new()));

        Registry {
            loggers: RwLock::new(HashMap::new()),
            defaults: Arc::new(Defaults::new(self.default_level, output)),
            shared: self.shared,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
