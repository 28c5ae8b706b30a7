//! `stil parse` — print the model of one file.

use crate::render::render;
use crate::{settings, GlobalArgs, ParseArgs, ReportFormat};

/// Runs the `stil parse` command.
///
/// Prints the rendered model to stdout and returns exit code 0; a parse
/// failure is returned as an error.
pub fn run(args: &ParseArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let format = match args.format {
        Some(format) => format,
        None => ReportFormat::from(settings::load(global)?.output.format),
    };
    let test = stil_parser::parse_file(&args.file)?;
    print!("{}", render(&test, format)?);
    Ok(0)
}
