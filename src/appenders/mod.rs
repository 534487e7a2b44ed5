//! Output implementations

pub mod console;
pub mod memory;

pub use console::ConsoleOutput;
pub use memory::{CapturedRecord, MemoryOutput};

// Re-export traits for convenience
pub use crate::core::{Output, SharedOutput};
