//! `stil check` — validate files and report each result.

use std::path::Path;

use crate::render::summary;
use crate::{CheckArgs, GlobalArgs};

/// Runs the `stil check` command.
///
/// Every file is parsed even after a failure. Returns exit code 0 if all
/// files parse, 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let failures = args
        .files
        .iter()
        .filter(|path| !check_file(path, global.quiet))
        .count();
    if !global.quiet {
        eprintln!(
            "    Checked {} file(s), {} failed",
            args.files.len(),
            failures
        );
    }
    Ok(if failures == 0 { 0 } else { 1 })
}

fn check_file(path: &Path, quiet: bool) -> bool {
    match stil_parser::parse_file(path) {
        Ok(test) => {
            if !quiet {
                println!("ok     {} ({})", path.display(), summary(&test));
            }
            true
        }
        Err(e) => {
            println!("FAILED {}: {e}", path.display());
            false
        }
    }
}
