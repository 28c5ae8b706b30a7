//! Line-oriented parser turning STIL text into a [`StilTest`].
//!
//! Parsing runs six stages in a fixed order over the fully buffered source:
//! test name, `Signals`, `SignalGroups`, the `Timing` period, `Waveforms`
//! and finally the pattern stream of `TesterCycle` markers and `V { }`
//! blocks. The first failure aborts the parse; errors raised inside a block
//! carry the offending line (see [`StilError::AtLine`]).
//!
//! [`batch`] loads many files from a set of directories.

#![warn(missing_docs)]

pub mod batch;
mod blocks;
mod cursor;
mod tokens;

use std::path::{Path, PathBuf};

use stil_common::StilError;
use stil_model::StilTest;
use thiserror::Error;
use tracing::info;

use crate::cursor::Cursor;

pub use batch::{load_batch, LoadedTest};

/// Errors that can occur while loading a STIL file from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A batch file exists but could not be read.
    #[error("{}: {source}", path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The read failure.
        source: std::io::Error,
    },
    /// The file was read but its content is not a valid STIL test.
    #[error("{}: {source}", path.display())]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The parse failure.
        source: StilError,
    },
}

/// Parses the text of one STIL file.
///
/// # Errors
///
/// Returns the first [`StilError`] raised by any stage.
pub fn parse_str(text: &str) -> Result<StilTest, StilError> {
    let mut cursor = Cursor::new(text);
    let mut test = StilTest::new();
    blocks::test_name(&mut cursor, &mut test)?;
    blocks::signals(&mut cursor, &mut test)?;
    blocks::signal_groups(&mut cursor, &mut test)?;
    blocks::waveform_table(&mut cursor, &mut test)?;
    blocks::waveforms(&mut cursor, &mut test)?;
    blocks::test_vectors(&mut cursor, &mut test)?;
    Ok(test)
}

/// Reads and parses a STIL file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, [`LoadError::Parse`] if its
/// content is rejected.
pub fn parse_file(path: &Path) -> Result<StilTest, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let test = parse_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Parsed {} ({} signals, {} cycles)",
        path.display(),
        test.signals().len(),
        test.test_vectors().count()
    );
    Ok(test)
}
