//! Configuration types deserialized from `stil.toml`.

use serde::Deserialize;
use std::path::PathBuf;

/// The top-level configuration parsed from `stil.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct StilConfig {
    /// Which files a batch run loads.
    #[serde(default)]
    pub batch: BatchConfig,
    /// How parsed tests are printed.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Batch loading settings.
///
/// Every test name is looked up in every directory as
/// `<directory>/<test>.<extension>`.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directories searched for pattern files, relative to the config file.
    #[serde(default)]
    pub directories: Vec<PathBuf>,
    /// Base names of the tests to load.
    #[serde(default)]
    pub tests: Vec<String>,
    /// File extension without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            tests: Vec::new(),
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    "stil".to_string()
}

/// Output settings.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Rendering used when printing a parsed test.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Rendering of a parsed test.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-indented text dump (default).
    #[default]
    Text,
    /// JSON document.
    Json,
}
