//! CLI argument definitions and the top-level run function.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use crate::report;
use crate::runner::check_files;
use crate::walk::find_catalog_files;

#[derive(Debug, Parser)]
#[command(
    name = "icumsg",
    version,
    about = "Check ICU plural and select syntax in translation catalogs",
    long_about = None
)]
pub struct Arguments {
    /// Catalog files or directories to scan for `<locale>.messages.json`
    /// files. Defaults to the current directory.
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Number of worker threads. Defaults to a count sized from the machine,
    /// overridable with the ICUMSG_CONCURRENCY environment variable.
    #[arg(long)]
    pub jobs: Option<usize>,

    /// Also report clean catalogs with their message counts
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): Run completed, no problems found
/// - `Failure` (1): Run completed but found problems
/// - `Error` (2): The tool itself failed (bad arguments, output error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

/// Run a full lint over the given paths and print the results. A path that
/// does not exist is an error; an existing path with no catalogs under it is
/// a clean run.
pub fn run_cli(args: Arguments) -> anyhow::Result<ExitStatus> {
    let paths = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths
    };
    for path in &paths {
        if !path.exists() {
            anyhow::bail!("path does not exist: {}", path.display());
        }
    }

    let files = find_catalog_files(&paths);
    if files.is_empty() {
        println!("No translation catalogs found in the given paths");
        return Ok(ExitStatus::Success);
    }

    let reports = check_files(files, args.jobs);
    let failed = reports.iter().any(|report| report.has_findings());
    match args.format {
        OutputFormat::Human => report::print_report(&reports, args.verbose),
        OutputFormat::Json => println!("{}", report::to_json(&reports)?),
    }

    Ok(if failed {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::from(1));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(2));
    }
}
