use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dtcalc::{CalendarDate, DayCount, DayKind};

/// dtcalc date calculator.
#[derive(Debug, Parser)]
#[command(
    name = "dtcalc",
    version,
    about = "Performs operations between dates and between dates and day intervals"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML settings file [default: dtcalc.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// One line typed in interactive mode, parsed without a binary name.
#[derive(Debug, Parser)]
#[command(name = "dtcalc", no_binary_name = true, disable_version_flag = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add or subtract a number of days from a date.
    Calc(CalcArgs),
    /// Calculate the difference in days between two dates.
    Diff(DiffArgs),
    /// Count the days from today until a date.
    Until(UntilArgs),
    /// Enter interactive mode.
    #[command(visible_aliases = ["iterate", "iterative", "init", "initialize", "ini"])]
    Iter,
}

/// Arguments for the `calc` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub struct CalcArgs {
    /// Start date (DD-MM-YYYY).
    #[arg(value_name = "DATE", value_parser = parse_date)]
    pub date: CalendarDate,

    /// Number of days to add (positive) or subtract (negative).
    #[arg(value_name = "DAYS", allow_negative_numbers = true)]
    pub interval: DayCount,

    /// Count consecutive (calendar) days or business days [default: from settings].
    #[arg(short, long)]
    pub kind: Option<DayKind>,
}

/// Arguments for the `diff` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub struct DiffArgs {
    /// Start date (DD-MM-YYYY).
    #[arg(value_parser = parse_date)]
    pub start: CalendarDate,

    /// End date (DD-MM-YYYY).
    #[arg(value_parser = parse_date)]
    pub end: CalendarDate,

    /// Also break the difference down into business and weekend days.
    #[arg(short, long)]
    pub report: bool,
}

/// Arguments for the `until` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub struct UntilArgs {
    /// Target date (DD-MM-YYYY).
    #[arg(value_parser = parse_date)]
    pub date: CalendarDate,
}

fn parse_date(s: &str) -> Result<CalendarDate, String> {
    CalendarDate::parse_dmy(s).map_err(|_| format!("Invalid date: '{s}'. Use DD-MM-YYYY."))
}
