//! Parsing and validation of `stil.toml` configuration files.
//!
//! The configuration names the directories and test names a batch run loads
//! and the default output format of the command-line tool.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
