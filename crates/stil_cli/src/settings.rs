//! Locating and loading `stil.toml` for CLI commands.

use std::path::{Path, PathBuf};

use stil_config::{StilConfig, CONFIG_FILE_NAME};

use crate::GlobalArgs;

/// Walks up from `start` looking for the nearest `stil.toml`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Loads the configuration selected by the global flags.
///
/// An explicit `--config` path must exist. Without it, the nearest
/// `stil.toml` above the current directory is used if there is one, and
/// defaults otherwise.
pub fn load(global: &GlobalArgs) -> Result<StilConfig, Box<dyn std::error::Error>> {
    if let Some(ref path) = global.config {
        let path = PathBuf::from(path);
        let config = if path.is_dir() {
            stil_config::load_config(&path)?
        } else {
            stil_config::load_config_file(&path)?
        };
        return Ok(config);
    }
    let cwd = std::env::current_dir()?;
    match find_config(&cwd) {
        Some(path) => {
            tracing::debug!("Using configuration {}", path.display());
            Ok(stil_config::load_config_file(&path)?)
        }
        None => Ok(StilConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_config(&nested), Some(dir.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalArgs {
            quiet: true,
            config: Some(dir.path().join("missing.toml").display().to_string()),
        };
        assert!(load(&global).is_err());
    }

    #[test]
    fn explicit_config_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[batch]\ntests = [\"scan\"]\n",
        )
        .unwrap();
        let global = GlobalArgs {
            quiet: true,
            config: Some(dir.path().display().to_string()),
        };
        assert_eq!(load(&global).unwrap().batch.tests, vec!["scan"]);
    }
}
