//! Work Eye time CLI - Formats dashboard timestamps from the command line
//!
//! Provides:
//! - Clock-time, date-time and relative-time formatting of raw timestamps
//! - Side-by-side comparison tables
//! - Rewriting of timestamp and duration fields in API payloads

mod commands;
mod helpers;
mod output;

use std::fmt::Display;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, TimeZone};
use clap::{Parser, Subcommand};
use workeye_timefmt::{FieldStyle, TimeFormat};

use commands::{cmd_format, cmd_render, cmd_table};

#[derive(Parser)]
#[command(name = "workeye-time")]
#[command(about = "Formats Work Eye dashboard timestamps for display", long_about = None)]
#[command(version)]
struct Cli {
    /// Pin "now" to this RFC 3339 instant (default: system clock)
    #[arg(long, global = true)]
    now: Option<String>,

    /// Display in a fixed UTC offset such as +05:30 or Z (default: local zone)
    #[arg(long, global = true, allow_hyphen_values = true)]
    utc_offset: Option<String>,

    /// Log level
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Formats timestamps as 12-hour clock times (reads stdin lines when none are given)
    Clock {
        timestamps: Vec<String>,
    },

    /// Formats timestamps as YYYY-MM-DD HH:MM:SS
    Datetime {
        timestamps: Vec<String>,
    },

    /// Formats timestamps relative to now ("3 minutes ago")
    Relative {
        timestamps: Vec<String>,
    },

    /// Shows every format side by side
    Table {
        timestamps: Vec<String>,
    },

    /// Formats screen-time durations given in seconds
    Duration {
        #[arg(allow_hyphen_values = true)]
        seconds: Vec<String>,
    },

    /// Rewrites timestamp and duration fields in a JSON payload
    Render {
        /// Input JSON file, or - for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON object of extra field rules, e.g. {"seen_at": "relative"}
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Use only the rules from --rules, dropping the built-in ones
        #[arg(long, requires = "rules")]
        replace_rules: bool,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&cli.log_level)
    ).init();

    let clock = helpers::resolve_clock(cli.now.as_deref())?;

    match cli.utc_offset.as_deref() {
        Some(offset) => {
            let zone = helpers::parse_utc_offset(offset)?;
            log::debug!("Display zone: fixed offset {}", zone);
            run(cli.command, TimeFormat::new(zone, clock))
        }
        None => {
            log::debug!("Display zone: local");
            run(cli.command, TimeFormat::new(Local, clock))
        }
    }
}

fn run<Tz>(command: Commands, fmt: TimeFormat<Tz>) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match command {
        Commands::Clock { timestamps } => {
            cmd_format(FieldStyle::Clock, timestamps, &fmt)?;
        }
        Commands::Datetime { timestamps } => {
            cmd_format(FieldStyle::DateTime, timestamps, &fmt)?;
        }
        Commands::Relative { timestamps } => {
            cmd_format(FieldStyle::Relative, timestamps, &fmt)?;
        }
        Commands::Duration { seconds } => {
            cmd_format(FieldStyle::Duration, seconds, &fmt)?;
        }
        Commands::Table { timestamps } => {
            cmd_table(timestamps, &fmt)?;
        }
        Commands::Render { input, output, rules, replace_rules, pretty } => {
            cmd_render(input, output, rules, replace_rules, pretty, &fmt)?;
        }
    }

    Ok(())
}
