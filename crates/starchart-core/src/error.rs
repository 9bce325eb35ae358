//! Core error types for the Starchart application.
//!
//! This module defines the central error type used across all subsystems.
//! Each subsystem error is represented as a variant for clear error propagation.

use thiserror::Error;

/// Central error type for all Starchart operations.
#[derive(Error, Debug)]
pub enum StarchartError {
    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Preference store errors (reading, writing, corrupt file)
    #[error("preference error: {0}")]
    Preference(#[from] PreferenceError),

    /// Validation errors (invalid input, constraints)
    #[error("validation error: {0}")]
    Validation(String),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Preference store errors.
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// The preference file exists but is not a JSON object
    #[error("preference file {path} is corrupt: {source}")]
    Corrupt {
        /// Path of the preference file
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize preferences
    #[error("failed to serialize preferences: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error reading/writing the preference file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `StarchartError`.
pub type Result<T> = std::result::Result<T, StarchartError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StarchartError::Validation("unknown resource kind 'ships'".to_string());
        assert_eq!(
            err.to_string(),
            "validation error: unknown resource kind 'ships'"
        );

        let err = ConfigError::InvalidValue {
            field: "api.timeout_secs".to_string(),
            reason: "must be greater than zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for api.timeout_secs: must be greater than zero"
        );
    }

    #[test]
    fn test_error_from_config() {
        let config_err = ConfigError::NoConfigDir;
        let err: StarchartError = config_err.into();
        assert!(matches!(err, StarchartError::Config(_)));
    }

    #[test]
    fn test_error_from_preference() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: StarchartError = PreferenceError::from(io_err).into();
        assert!(matches!(err, StarchartError::Preference(PreferenceError::Io(_))));
    }
}
