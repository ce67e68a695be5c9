//! Error types for projman-core

use thiserror::Error;

/// Result type alias using projman-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for projman
#[derive(Error, Debug)]
pub enum Error {
    /// Required environment variable is not set
    #[error("Environment variable {var} is not set")]
    MissingEnv { var: String },

    /// User home/config directory could not be resolved
    #[error("Could not determine the user home directory")]
    NoHomeDir,

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Permission value is not a valid octal mode
    #[error("Invalid permission mode: {value}. Expected a string of octal digits, e.g. \"0755\"")]
    InvalidMode { value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing environment variable error
    pub fn missing_env(var: impl Into<String>) -> Self {
        Self::MissingEnv { var: var.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid mode error
    pub fn invalid_mode(value: impl Into<String>) -> Self {
        Self::InvalidMode {
            value: value.into(),
        }
    }
}
