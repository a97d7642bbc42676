//! Error handling for pw-toolkit

use std::path::Path;

use thiserror::Error;

/// Main error type for pw-toolkit
#[derive(Error, Debug, Clone)]
pub enum PwToolkitError {
    #[error("Empty input: {field} is required")]
    EmptyInput { field: String },

    #[error("Invalid limit '{value}': {message}")]
    InvalidLimit { value: String, message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Prompt error: {message}")]
    Prompt { message: String },

    #[error("Unsupported: {message}")]
    Unsupported { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PwToolkitError {
    /// Create an empty input error
    pub fn empty_input(field: impl Into<String>) -> Self {
        Self::EmptyInput {
            field: field.into(),
        }
    }

    /// Create an invalid limit error
    pub fn invalid_limit(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidLimit {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an IO error for a specific file
    pub fn io_at(err: &std::io::Error, path: &Path) -> Self {
        Self::io(err.to_string(), Some(path.display().to_string()))
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error came from bad user input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput { .. } | Self::InvalidLimit { .. } | Self::Validation { .. }
        )
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput { field } => {
                format!("⚠️  Empty input: please enter a {}", field)
            }
            Self::InvalidLimit { value, message } => {
                format!("❌ Invalid limit '{}': {}\n💡 Please enter a valid number for the limit", value, message)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or PW_TOOLKIT_* variables", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ Could not save the file{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Prompt { message } => {
                format!("❌ Prompt failed: {}\n💡 Pass the values as arguments when not running in a terminal", message)
            }
            Self::Unsupported { message } => {
                format!("ℹ️  {}", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

impl From<std::io::Error> for PwToolkitError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<serde_json::Error> for PwToolkitError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("Failed to serialize output: {}", err))
    }
}

impl From<inquire::InquireError> for PwToolkitError {
    fn from(err: inquire::InquireError) -> Self {
        Self::prompt(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PwToolkitError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::PwToolkitError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PwToolkitError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::PwToolkitError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PwToolkitError::validation(format!($fmt, $($arg)*))
    };
}
