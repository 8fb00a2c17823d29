//! Table command implementation

use std::fmt::Display;

use anyhow::Result;
use chrono::TimeZone;
use colored::Colorize;
use tabled::{Table, settings::{Style, Color, Modify, object::Rows}};
use workeye_timefmt::TimeFormat;

use crate::helpers::collect_inputs;
use crate::output::TimestampRow;

/// Displays every format of each timestamp side by side
pub fn cmd_table<Tz>(inputs: Vec<String>, fmt: &TimeFormat<Tz>) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let inputs = collect_inputs(inputs)?;
    if inputs.is_empty() {
        println!("{} No timestamps given", "❌".red());
        return Ok(());
    }

    let mut unparsed = 0;
    let rows: Vec<TimestampRow> = inputs
        .iter()
        .map(|raw| {
            let clock = fmt.try_clock_time(Some(raw.as_str()));
            let date_time = fmt.try_date_time(Some(raw.as_str()));
            let relative = fmt.try_relative_time(Some(raw.as_str()));
            if clock.is_err() && date_time.is_err() && relative.is_err() {
                unparsed += 1;
            }
            TimestampRow {
                raw: if raw.is_empty() { "(empty)".to_string() } else { raw.clone() },
                clock: clock.unwrap_or_else(|_| raw.clone()),
                date_time: date_time.unwrap_or_else(|_| raw.clone()),
                relative: relative.unwrap_or_else(|_| raw.clone()),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::FG_BRIGHT_CYAN));
    println!("{}", table);

    if unparsed > 0 {
        eprintln!(
            "\n  {} {} value(s) did not parse and are shown as-is",
            "⚠".yellow(),
            unparsed.to_string().bold()
        );
    }
    Ok(())
}
