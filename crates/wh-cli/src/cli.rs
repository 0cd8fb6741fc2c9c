//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser};

/// Creates reports from plaintext logs of working hours.
///
/// Without an output option, prints the cumulative balance of worked hours
/// against the nominal working day.
#[derive(Debug, Parser)]
#[command(name = "wh", version, about, long_about = None)]
pub struct Cli {
    /// Plaintext file with working times.
    pub filename: PathBuf,

    #[command(flatten)]
    pub output: OutputMode,

    /// Working hours per day (default: 8.0), only used with '--delta'.
    #[arg(short, long, value_name = "HOURS")]
    pub working_hours: Option<f64>,

    /// Hours of break to subtract from each working day (default: 0.5), only
    /// used with '--delta'.
    #[arg(short = 'b', long, value_name = "HOURS")]
    pub daily_break_hours: Option<f64>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Mutually exclusive output selection.
#[derive(Debug, Default, Args)]
#[group(multiple = false)]
pub struct OutputMode {
    /// Parse file and print CSV.
    #[arg(long)]
    pub csv: bool,

    /// Print cumulative delta (default action).
    #[arg(short, long)]
    pub delta: bool,

    /// Count in-office, WFH, etc. days.
    #[arg(short, long)]
    pub count: bool,

    /// Parse file and print the periods as JSON.
    #[arg(long)]
    pub json: bool,

    /// Parse file and print it back in canonical log syntax.
    #[arg(long)]
    pub normalize: bool,
}

/// The report to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Csv,
    Delta,
    Count,
    Json,
    Normalize,
}

impl OutputMode {
    pub const fn action(&self) -> Action {
        if self.csv {
            Action::Csv
        } else if self.count {
            Action::Count
        } else if self.json {
            Action::Json
        } else if self.normalize {
            Action::Normalize
        } else {
            Action::Delta
        }
    }
}
