//! Error type returned by shell commands.

use serde::Serialize;
use starchart_core::{PreferenceError, StarchartError};

/// Serializable error for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandError {
    /// Error code for frontend handling (e.g., "INVALID_INPUT")
    pub code: String,
    /// User-friendly error message
    pub message: String,
    /// Optional debugging context
    pub details: Option<serde_json::Value>,
}

impl CommandError {
    /// Create a new command error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a command error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<StarchartError> for CommandError {
    fn from(err: StarchartError) -> Self {
        match err {
            StarchartError::Validation(msg) => Self::new("INVALID_INPUT", msg),
            StarchartError::Preference(err) => err.into(),
            StarchartError::Config(err) => {
                Self::new("CONFIG_ERROR", format!("Configuration error: {err}"))
            }
            StarchartError::Internal(msg) => Self::new("INTERNAL_ERROR", msg),
        }
    }
}

impl From<PreferenceError> for CommandError {
    fn from(err: PreferenceError) -> Self {
        match err {
            PreferenceError::Corrupt { path, .. } => Self::with_details(
                "PREFERENCES_CORRUPT",
                "Preference file is not valid JSON",
                serde_json::json!({ "path": path }),
            ),
            other => Self::new(
                "PREFERENCES_ERROR",
                format!("Failed to save preferences: {other}"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starchart_core::ConfigError;

    #[test]
    fn test_command_error_new() {
        let err = CommandError::new("TEST_CODE", "Test message");
        assert_eq!(err.code, "TEST_CODE");
        assert_eq!(err.message, "Test message");
        assert!(err.details.is_none());
        assert_eq!(err.to_string(), "TEST_CODE: Test message");
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: CommandError = StarchartError::Validation("unknown resource 'ships'".into()).into();
        assert_eq!(err.code, "INVALID_INPUT");
        assert!(err.message.contains("ships"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: CommandError = StarchartError::Config(ConfigError::InvalidValue {
            field: "api.timeout_secs".to_string(),
            reason: "must be greater than zero".to_string(),
        })
        .into();
        assert_eq!(err.code, "CONFIG_ERROR");
        assert!(err.message.contains("api.timeout_secs"));
    }

    #[test]
    fn test_wrapped_preference_error_keeps_code() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CommandError = StarchartError::Preference(PreferenceError::Io(io)).into();
        assert_eq!(err.code, "PREFERENCES_ERROR");
    }

    #[test]
    fn test_corrupt_preferences_conversion() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CommandError = PreferenceError::Corrupt {
            path: "/tmp/preferences.json".to_string(),
            source,
        }
        .into();
        assert_eq!(err.code, "PREFERENCES_CORRUPT");
        assert_eq!(
            err.details,
            Some(serde_json::json!({ "path": "/tmp/preferences.json" }))
        );
    }

    #[test]
    fn test_io_preference_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CommandError = PreferenceError::Io(io).into();
        assert_eq!(err.code, "PREFERENCES_ERROR");
    }
}
