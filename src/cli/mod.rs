//! CLI interface and argument parsing

pub mod commands;

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

/// Printed when the positional arguments are missing or extra
pub const USAGE_MESSAGE: &str = "The following two arguments are required: (1) Input file name and path (2) Path for output file(s)";

/// Text to print and exit code for a command line that does not start a run
#[derive(Debug)]
pub struct EarlyExit {
    pub code: i32,
    pub message: String,
}

/// Enrollment splitter - deduplicates enrollment records into per-company files
#[derive(Parser, Debug)]
#[command(name = "enrollment")]
#[command(version, about, long_about = None)]
#[command(author = "Enrollment Contributors")]
pub struct Cli {
    /// Path to an optional configuration file
    #[arg(short, long, env = "ENROLLMENT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ENROLLMENT_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub run: commands::run::RunArgs,
}

/// Parses the command line
///
/// `--help` and `--version` exit with 0. Any other parse failure, including
/// missing or extra positional arguments, leads with [`USAGE_MESSAGE`] and
/// exits with 2.
pub fn parse_args<I, T>(args: I) -> Result<Cli, EarlyExit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EarlyExit {
            code: 0,
            message: e.render().to_string(),
        },
        _ => EarlyExit {
            code: 2,
            message: format!("{USAGE_MESSAGE}\n{}", e.render()),
        },
    })
}
