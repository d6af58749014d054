use clap::{Parser, Subcommand};

/// U.S. federal business day calculator.
#[derive(Parser)]
#[command(
    name = "busdays",
    version,
    about = "Count U.S. business days, skipping weekends and observed federal holidays"
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
    /// Compute the date a number of business days from a start date.
    Add(AddArgs),
    /// List the observed federal holidays of a year.
    Holidays(HolidaysArgs),
    /// Render a text calendar marking business and non-business days.
    Show(ShowArgs),
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Start date in MM/DD/YYYY format, counted as day 1 when it is a business day.
    #[arg(short, long)]
    pub start: String,

    /// Number of business days to count.
    #[arg(short, long, default_value_t = 30)]
    pub days: i32,

    /// Print every business date of the span, not only the final one.
    #[arg(short, long)]
    pub list: bool,

    /// Emit the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Calendar year.
    pub year: i32,

    /// Emit the holidays as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Calendar year.
    pub year: i32,

    /// Restrict the rendering to a single month (1-12).
    #[arg(short, long)]
    pub month: Option<u8>,
}
