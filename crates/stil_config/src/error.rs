//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a `stil.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_config_from_str;

    #[test]
    fn empty_extension_message() {
        let err = load_config_from_str("[batch]\nextension = \"\"\n").unwrap_err();
        assert_eq!(err.to_string(), "validation error: batch.extension is empty");
    }

    #[test]
    fn blank_test_name_message() {
        let err = load_config_from_str("[batch]\ntests = [\"scan\", \"  \"]\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: batch.tests entry '  ' is not a file base name"
        );
    }

    #[test]
    fn wrong_field_type_is_parse_error() {
        let err = load_config_from_str("[batch]\ntests = \"scan\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().starts_with("failed to parse configuration: "));
    }

    #[test]
    fn missing_file_message_names_the_cause() {
        let dir = tempfile::tempdir().unwrap();
        let err = crate::load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
        assert!(err.to_string().starts_with("failed to read configuration: "));
    }
}
