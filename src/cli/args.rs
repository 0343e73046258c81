use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rectangles")]
#[command(
    version,
    about = "Adjacency, containment and intersection between two rectangles",
    long_about = None
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Evaluate a single pair of rectangles
    Eval(EvalArgs),
    /// Evaluate every pair found in coordinates files
    Batch(BatchArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    /// First rectangle: bottom-left X and Y, then upper-right X and Y
    #[arg(
        long,
        num_args = 4,
        required = true,
        allow_hyphen_values = true,
        value_names = ["X1", "Y1", "X2", "Y2"]
    )]
    pub first: Vec<String>,

    /// Second rectangle: bottom-left X and Y, then upper-right X and Y
    #[arg(
        long,
        num_args = 4,
        required = true,
        allow_hyphen_values = true,
        value_names = ["X1", "Y1", "X2", "Y2"]
    )]
    pub second: Vec<String>,

    /// Report format [default: json]
    #[arg(short, long, value_enum, default_value_t)]
    pub format: ReportFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Coordinates files or directories
    #[arg(required_unless_present = "config")]
    pub input: Vec<PathBuf>,

    /// Load settings from a .rectangles config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stop as soon as a pair cannot be evaluated
    #[arg(long)]
    pub fail_fast: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON reports
    #[arg(long)]
    pub pretty: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// JSON object with adjacency, containment and intersection fields
    #[default]
    Json,
    /// Human-readable lines
    Text,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Json => f.write_str("json"),
            ReportFormat::Text => f.write_str("text"),
        }
    }
}

impl EvalArgs {
    /// Corner lists in `[x1, y1, x2, y2]` order for both rectangles
    pub fn corners(&self) -> Option<([String; 4], [String; 4])> {
        let first: [String; 4] = self.first.clone().try_into().ok()?;
        let second: [String; 4] = self.second.clone().try_into().ok()?;
        Some((first, second))
    }
}
