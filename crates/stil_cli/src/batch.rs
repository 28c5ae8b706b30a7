//! `stil batch` — load configured tests from configured directories.

use std::path::PathBuf;

use stil_parser::load_batch;

use crate::render::{render, summary};
use crate::{settings, BatchArgs, GlobalArgs, ReportFormat};

/// Runs the `stil batch` command.
///
/// Command-line directories, tests and extension override the `[batch]`
/// section of `stil.toml`. Missing files are skipped; the first file that
/// fails to parse aborts the run with an error.
pub fn run(args: &BatchArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = settings::load(global)?;

    let dirs: Vec<PathBuf> = if args.dirs.is_empty() {
        config.batch.directories
    } else {
        args.dirs.clone()
    };
    let tests: Vec<String> = if args.tests.is_empty() {
        config.batch.tests
    } else {
        args.tests.clone()
    };
    let extension = args.extension.as_deref().unwrap_or(&config.batch.extension);
    if dirs.is_empty() || tests.is_empty() {
        return Err("no batch input: pass --dir and --test or set [batch] in stil.toml".into());
    }

    let loaded = load_batch(&dirs, &tests, extension)?;

    let format = args
        .format
        .unwrap_or_else(|| ReportFormat::from(config.output.format));
    for item in &loaded {
        if args.dump {
            print!("{}", render(&item.test, format)?);
        } else if !global.quiet {
            println!("{}  {}", summary(&item.test), item.path.display());
        }
    }
    if !global.quiet {
        eprintln!(
            "     Loaded {} of {} candidate file(s)",
            loaded.len(),
            dirs.len() * tests.len()
        );
    }
    Ok(0)
}
