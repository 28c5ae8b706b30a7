//! Loading a batch of STIL files from a set of directories.
//!
//! Every `(directory, name)` pair is tried as `<directory>/<name>.<ext>`.
//! A file that does not exist, or sits under a path that is not a
//! directory, is skipped. Any other read failure, and any file that fails to
//! parse, aborts the batch.

use std::io;
use std::path::{Path, PathBuf};

use stil_model::StilTest;
use tracing::{debug, warn};

use crate::{parse_str, LoadError};

/// One successfully parsed file of a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedTest {
    /// The file the test was read from.
    pub path: PathBuf,
    /// The parsed test.
    pub test: StilTest,
}

/// Loads `<dir>/<name>.<extension>` for every directory and name, in
/// directory-major order.
///
/// # Errors
///
/// [`LoadError::Read`] for the first existing file that cannot be read as
/// UTF-8 text, [`LoadError::Parse`] for the first file whose content is
/// rejected.
pub fn load_batch<P, S>(
    directories: &[P],
    names: &[S],
    extension: &str,
) -> Result<Vec<LoadedTest>, LoadError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let mut loaded = Vec::new();
    for dir in directories {
        for name in names {
            let path = dir
                .as_ref()
                .join(format!("{}.{extension}", name.as_ref()));
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(err) if is_absent(&err) => {
                    warn!("Skipping {}: {err}", path.display());
                    continue;
                }
                Err(source) => return Err(LoadError::Read { path, source }),
            };
            let test = parse_str(&text).map_err(|source| LoadError::Parse {
                path: path.clone(),
                source,
            })?;
            debug!("Loaded {}", path.display());
            loaded.push(LoadedTest { path, test });
        }
    }
    Ok(loaded)
}

/// The file is missing, or a parent component is not a directory.
fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}
