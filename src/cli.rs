use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use lagstat_correlation::PacfMethod;

/// Lagstat time-series analysis.
#[derive(Parser)]
#[command(
    name = "lagstat",
    version,
    about = "Autocorrelation, AR fitting and smoothing for numeric series"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute moments, ACF, PACF and an AR fit and write a JSON report.
    Analyze(AnalyzeArgs),
    /// Fit an AR model and write the estimated series.
    Simulate(SimulateArgs),
    /// Write a moving average, EMA or MACD of the input.
    Smooth(SmoothArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Input series, one observation per line.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the number of lags from config.
    #[arg(long)]
    pub max_lags: Option<usize>,

    /// Override the PACF method from config (yw, mle or ld).
    #[arg(long)]
    pub method: Option<PacfMethod>,

    /// Override the AR order from config.
    #[arg(long)]
    pub order: Option<usize>,

    /// Path for the JSON report (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Input series, one observation per line.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the AR order from config.
    #[arg(long)]
    pub order: Option<usize>,

    /// Override the output length from config.
    #[arg(long)]
    pub length: Option<usize>,

    /// Draw Gaussian innovations from this seed instead of using none.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write this many independent burned-in paths instead of the
    /// estimated series, one tab-separated column per path.
    #[arg(long)]
    pub paths: Option<usize>,

    /// Output path (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Smoothing transform selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SmoothMethod {
    /// Simple moving average.
    Ma,
    /// Exponential moving average.
    Ema,
    /// MACD line and signal.
    Macd,
}

/// Arguments for the `smooth` subcommand.
#[derive(clap::Args)]
pub struct SmoothArgs {
    /// Smoothing transform.
    #[arg(value_enum)]
    pub method: SmoothMethod,

    /// Input series, one observation per line.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the MA window or EMA span from config.
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Use Wilder smoothing for the EMA.
    #[arg(long)]
    pub wilder: bool,

    /// Output path (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
