//! In-memory output that captures records

use crate::core::{LogLevel, Output, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single message as seen by [`MemoryOutput`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedRecord {
    pub logger: String,
    pub level: LogLevel,
    pub message: String,
}

/// Keeps every record it receives, in arrival order.
///
/// Useful for asserting on what a component logged:
///
/// ```
/// use named_logger::prelude::*;
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemoryOutput::new());
/// let registry = Registry::new();
/// let logger = registry.set_output("jobs", Some(memory.clone()));
///
/// logger.error(|| format!("job {} failed", 7)).unwrap();
///
/// let records = memory.records();
/// assert_eq!(records[0].level, LogLevel::Error);
/// assert_eq!(records[0].message, "job 7 failed");
/// ```
#[derive(Debug, Default)]
pub struct MemoryOutput {
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    /// Messages only, in arrival order
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    /// Remove and return everything captured so far
    pub fn take(&self) -> Vec<CapturedRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Output for MemoryOutput {
    fn write(&self, logger: &str, level: LogLevel, message: &dyn Display) -> Result<()> {
        // Format before locking; Display impls may log themselves.
        let record = CapturedRecord {
            logger: logger.to_owned(),
            level,
            message: message.to_string(),
        };
        self.records.lock().push(record);
        Ok(())
    }
}
