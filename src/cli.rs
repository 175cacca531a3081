use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Amlich lunisolar calendar converter.
#[derive(Parser)]
#[command(
    name = "amlich",
    version,
    about = "Solar to lunisolar calendar conversion"
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
    /// Convert a single Gregorian date to its lunar date.
    Convert(ConvertArgs),
    /// Print the lunar label for every day of a Gregorian month.
    Month(MonthArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date in YYYY-MM-DD form.
    #[arg(short, long)]
    pub date: String,

    /// UTC offset in hours (overrides config).
    #[arg(short, long, allow_hyphen_values = true)]
    pub timezone: Option<f64>,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "amlich.toml")]
    pub config: PathBuf,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Gregorian year.
    #[arg(short, long)]
    pub year: i32,

    /// Gregorian month (1..=12).
    #[arg(short, long)]
    pub month: u32,

    /// UTC offset in hours (overrides config).
    #[arg(short, long, allow_hyphen_values = true)]
    pub timezone: Option<f64>,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "amlich.toml")]
    pub config: PathBuf,
}
