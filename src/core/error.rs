//! Typed errors for engine configuration
//!
//! Inflection itself never fails: `pluralize` and `singularize` are total and
//! always return a best-effort form. The only fallible surface is building an
//! engine from an [`InflectorConfig`](crate::config::InflectorConfig), which
//! reports problems through [`ConfigError`].

use thiserror::Error;

/// Errors related to configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("{}", parse_message(.file, .message))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Two special-case keys that normalize to the same word
    #[error("Duplicate special case '{key}'")]
    DuplicateKey { key: String },
}

fn parse_message(file: &Option<String>, message: &str) -> String {
    match file {
        Some(file) => format!("Failed to parse config file '{}': {}", file, message),
        None => format!("Failed to parse config: {}", message),
    }
}

impl ConfigError {
    /// Get a stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
            ConfigError::DuplicateKey { .. } => "CONFIG_DUPLICATE_KEY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ConfigError::ParseError {
            file: Some("inflector.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse config file 'inflector.yaml': bad indent"
        );

        let err = ConfigError::ParseError {
            file: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to parse config: bad indent");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            field: "special_cases".to_string(),
            value: "".to_string(),
            message: "key must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value '' for field 'special_cases': key must not be empty"
        );
        assert_eq!(err.error_code(), "CONFIG_INVALID_VALUE");
    }

    #[test]
    fn test_duplicate_key_display() {
        let err = ConfigError::DuplicateKey {
            key: "Mann".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate special case 'Mann'");
        assert_eq!(err.error_code(), "CONFIG_DUPLICATE_KEY");
    }
}
