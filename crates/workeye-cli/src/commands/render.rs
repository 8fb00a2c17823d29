//! Render command implementation

use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::TimeZone;
use colored::Colorize;
use serde_json::Value;
use workeye_timefmt::TimeFormat;

use crate::helpers::{load_rules, read_input};

/// Rewrites the timestamp and duration fields of a JSON payload
pub fn cmd_render<Tz>(
    input: PathBuf,
    output: Option<PathBuf>,
    rules: Option<PathBuf>,
    replace_rules: bool,
    pretty: bool,
    fmt: &TimeFormat<Tz>,
) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let rules = load_rules(rules.as_deref(), replace_rules)?;
    let text = read_input(&input)?;
    let mut payload: Value = serde_json::from_str(&text)
        .with_context(|| format!("Invalid JSON payload in {}", input.display()))?;

    let summary = fmt.render_payload(&mut payload, &rules);
    log::info!("Rendered payload: {} rewritten, {} unparsed", summary.rewritten, summary.unparsed);

    let rendered = if pretty {
        serde_json::to_string_pretty(&payload)
    } else {
        serde_json::to_string(&payload)
    }
    .context("Failed to serialize rendered payload")?;

    match output {
        Some(path) => {
            fs::write(&path, rendered + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Wrote {}", "✅".green(), path.display().to_string().bold());
        }
        None => println!("{}", rendered),
    }

    eprintln!("  {}: {}", "Fields rewritten".bright_yellow(), summary.rewritten.to_string().bold());
    if summary.unparsed > 0 {
        eprintln!("  {}: {}", "Left as-is".bright_yellow(), summary.unparsed.to_string().bold());
    }
    Ok(())
}
