//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::StilConfig;
use std::path::Path;

/// File name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "stil.toml";

/// Loads and validates `stil.toml` from a directory.
///
/// Relative batch directories are resolved against `dir`.
pub fn load_config(dir: &Path) -> Result<StilConfig, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
///
/// Relative batch directories are resolved against the file's parent.
pub fn load_config_file(path: &Path) -> Result<StilConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut config = load_config_from_str(&content)?;
    if let Some(base) = path.parent() {
        for dir in &mut config.batch.directories {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }
    Ok(config)
}

/// Parses and validates a `stil.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<StilConfig, ConfigError> {
    let config: StilConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configured names are usable as file names.
fn validate_config(config: &StilConfig) -> Result<(), ConfigError> {
    let extension = &config.batch.extension;
    if extension.is_empty() {
        return Err(ConfigError::ValidationError(
            "batch.extension is empty".to_string(),
        ));
    }
    if extension.starts_with('.') {
        return Err(ConfigError::ValidationError(format!(
            "batch.extension '{extension}' must not start with '.'"
        )));
    }
    if let Some(name) = config
        .batch
        .tests
        .iter()
        .find(|t| t.trim().is_empty() || t.contains(['/', '\\']))
    {
        return Err(ConfigError::ValidationError(format!(
            "batch.tests entry '{name}' is not a file base name"
        )));
    }
    Ok(())
}
