//! Error types for the logger system
//!
//! Registry and logger operations never fail. The only errors that reach a
//! caller come from an [`Output`](super::Output) refusing a write, or from
//! parsing a level name.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Unrecognised level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create an invalid level error
    pub fn invalid_level<S: Into<String>>(name: S) -> Self {
        LoggerError::InvalidLevel(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::writer("sink closed");
        assert!(matches!(err, LoggerError::WriterError(_)));

        let err = LoggerError::invalid_level("loud");
        assert!(matches!(err, LoggerError::InvalidLevel(_)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LoggerError::writer("sink closed").to_string(),
            "Writer error: sink closed"
        );
        assert_eq!(
            LoggerError::invalid_level("loud").to_string(),
            "Invalid log level: 'loud'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
