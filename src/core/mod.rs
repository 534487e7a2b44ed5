//! Core logger types and traits

pub mod error;
pub mod log_level;
pub mod logger;
pub mod output;
pub mod registry;

pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use output::{Output, SharedOutput};
pub use registry::{Registry, RegistryBuilder};
