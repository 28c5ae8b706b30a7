//! STIL CLI — command-line front end of the STIL test model.
//!
//! Provides `stil parse` to print the model of one file, `stil check` to
//! validate several files, and `stil batch` to load a set of tests from
//! configured directories.

#![warn(missing_docs)]

mod batch;
mod check;
mod parse;
mod render;
mod settings;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Parse STIL pattern files into resolved per-cycle test vectors.
#[derive(Parser, Debug)]
#[command(name = "stil", version, about = "STIL test pattern parser")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Path to a custom `stil.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse one STIL file and print its model.
    Parse(ParseArgs),
    /// Parse files and report whether each one is valid.
    Check(CheckArgs),
    /// Load every configured test from every configured directory.
    Batch(BatchArgs),
}

/// Arguments for the `stil parse` subcommand.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// The STIL file to parse.
    pub file: PathBuf,

    /// Output format (defaults to `[output] format` from `stil.toml`).
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// Arguments for the `stil check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// The STIL files to check.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the `stil batch` subcommand.
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Directory to search; repeatable. Overrides `[batch] directories`.
    #[arg(short, long = "dir")]
    pub dirs: Vec<PathBuf>,

    /// Test base name to load; repeatable. Overrides `[batch] tests`.
    #[arg(short, long = "test")]
    pub tests: Vec<String>,

    /// File extension without the dot. Overrides `[batch] extension`.
    #[arg(long)]
    pub extension: Option<String>,

    /// Print the full model of every loaded test instead of a summary.
    #[arg(long)]
    pub dump: bool,

    /// Output format for `--dump`.
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// Model output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Tab-indented text dump.
    Text,
    /// JSON document.
    Json,
}

impl From<stil_config::OutputFormat> for ReportFormat {
    fn from(format: stil_config::OutputFormat) -> Self {
        match format {
            stil_config::OutputFormat::Text => ReportFormat::Text,
            stil_config::OutputFormat::Json => ReportFormat::Json,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.quiet, cli.verbose);

    let global = GlobalArgs {
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Parse(ref args) => parse::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
        Command::Batch(ref args) => batch::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Log filter for the given flags; `RUST_LOG` takes precedence when set.
fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(quiet: bool, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(quiet, verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_parse_default() {
        let cli = Cli::parse_from(["stil", "parse", "scan.stil"]);
        match cli.command {
            Command::Parse(ref args) => {
                assert_eq!(args.file, PathBuf::from("scan.stil"));
                assert!(args.format.is_none());
            }
            _ => panic!("expected Parse command"),
        }
    }

    #[test]
    fn parse_parse_json() {
        let cli = Cli::parse_from(["stil", "parse", "scan.stil", "--format", "json"]);
        match cli.command {
            Command::Parse(ref args) => assert_eq!(args.format, Some(ReportFormat::Json)),
            _ => panic!("expected Parse command"),
        }
    }

    #[test]
    fn parse_check_files() {
        let cli = Cli::parse_from(["stil", "check", "a.stil", "b.stil"]);
        match cli.command {
            Command::Check(ref args) => {
                assert_eq!(args.files, vec![PathBuf::from("a.stil"), PathBuf::from("b.stil")]);
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn check_requires_a_file() {
        assert!(Cli::try_parse_from(["stil", "check"]).is_err());
    }

    #[test]
    fn parse_batch_repeated_flags() {
        let cli = Cli::parse_from([
            "stil", "batch", "--dir", "p1", "-d", "p2", "--test", "scan", "--extension", "pat",
            "--dump",
        ]);
        match cli.command {
            Command::Batch(ref args) => {
                assert_eq!(args.dirs, vec![PathBuf::from("p1"), PathBuf::from("p2")]);
                assert_eq!(args.tests, vec!["scan"]);
                assert_eq!(args.extension.as_deref(), Some("pat"));
                assert!(args.dump);
            }
            _ => panic!("expected Batch command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["stil", "--quiet", "--config", "/tmp/stil.toml", "batch"]);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.config.as_deref(), Some("/tmp/stil.toml"));
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::parse_from(["stil", "-vv", "check", "x.stil"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(log_level(false, cli.verbose), "debug");
        assert_eq!(log_level(false, 0), "warn");
        assert_eq!(log_level(false, 7), "trace");
        assert_eq!(log_level(true, 3), "error");
    }

    #[test]
    fn report_format_from_config() {
        assert_eq!(
            ReportFormat::from(stil_config::OutputFormat::Json),
            ReportFormat::Json
        );
    }
}
