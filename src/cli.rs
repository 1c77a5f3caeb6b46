use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Daily Office liturgical calendar.
#[derive(Parser)]
#[command(
    name = "office",
    version,
    about = "Liturgical season, week, day and hour for the Daily Office"
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
    /// Resolve an instant (default: now) to its place in the Daily Office.
    Resolve(ResolveArgs),
    /// List the observances of a civil year.
    Calendar(CalendarArgs),
}

/// Arguments for the `resolve` subcommand.
#[derive(clap::Args)]
pub struct ResolveArgs {
    /// Local civil time, `YYYY-MM-DDTHH:MM[:SS]` or `YYYY-MM-DD` (noon).
    #[arg(short, long)]
    pub at: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: text or json. Overrides the config file.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Also resolve this many days before the instant.
    #[arg(long)]
    pub before: Option<u32>,

    /// Also resolve this many days after the instant.
    #[arg(long)]
    pub after: Option<u32>,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Civil year to list.
    #[arg(short, long)]
    pub year: i32,

    /// Also list Sundays that are not kept this year.
    #[arg(long)]
    pub all: bool,

    /// Output format: text or json.
    #[arg(short, long, default_value = "text")]
    pub format: String,
}
