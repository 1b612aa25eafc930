//! Error handling for hash-forge

use thiserror::Error;

/// Main error type for hash-forge
#[derive(Error, Debug, Clone)]
pub enum HashForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid choice: {input:?}")]
    InvalidChoice { input: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Prompt error: {message}")]
    Prompt { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl HashForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid mode selector error
    pub fn invalid_choice(input: impl Into<String>) -> Self {
        Self::InvalidChoice {
            input: input.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or HASH_FORGE_* variables", message)
            }
            Self::InvalidChoice { .. } => "Invalid choice. Exiting.".to_string(),
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Io { message } => {
                format!("❌ Output error: {}", message)
            }
            Self::Prompt { message } => {
                format!("❌ Setup aborted: {}", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

impl From<std::io::Error> for HashForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<inquire::InquireError> for HashForgeError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => Self::prompt("cancelled by user"),
            other => Self::prompt(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for HashForgeError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("search task failed: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HashForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::HashForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::HashForgeError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::HashForgeError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::HashForgeError::validation(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_message() {
        let err = HashForgeError::invalid_choice("3");
        assert_eq!(err.user_message(), "Invalid choice. Exiting.");
        assert!(err.to_string().contains("\"3\""));
    }

    #[test]
    fn test_macros() {
        let err = config_error!("bad value {}", 7);
        assert!(err.to_string().contains("bad value 7"));

        let err = validation_error!("length");
        assert!(matches!(err, HashForgeError::Validation { .. }));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: HashForgeError = io.into();
        assert!(err.to_string().contains("pipe closed"));
    }
}
