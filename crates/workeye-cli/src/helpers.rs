//! Helper functions for CLI operations

use std::fs;
use std::io::{self, BufRead, Read};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use regex::Regex;
use workeye_timefmt::{Clock, FieldRules, FixedClock, SystemClock};

static UTC_OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])([0-9]{2}):?([0-9]{2})$").expect("utc offset pattern is valid")
});

/// Builds the clock from `--now`, falling back to the system clock
pub fn resolve_clock(now: Option<&str>) -> Result<Box<dyn Clock>> {
    match now {
        Some(s) => {
            let instant = DateTime::parse_from_rfc3339(s)
                .with_context(|| format!("Invalid --now value: {}. Expected RFC 3339, e.g. 2025-12-22T12:00:00Z", s))?
                .with_timezone(&Utc);
            log::debug!("Clock pinned to {}", instant);
            Ok(Box::new(FixedClock(instant)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Parses `+05:30`, `-0800`, `Z` or `UTC` into a fixed offset
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).context("zero offset is always valid");
    }

    let Some(caps) = UTC_OFFSET.captures(trimmed) else {
        bail!("Invalid --utc-offset value: {}. Expected ±HH:MM, e.g. +05:30", s);
    };

    let hours: i32 = caps[2].parse()?;
    let minutes: i32 = caps[3].parse()?;
    if minutes >= 60 {
        bail!("Invalid --utc-offset value: {}. Minutes must be below 60", s);
    }
    let secs = (hours * 3600 + minutes * 60) * if &caps[1] == "-" { -1 } else { 1 };

    FixedOffset::east_opt(secs)
        .with_context(|| format!("Invalid --utc-offset value: {}. Offset out of range", s))
}

/// Returns `args`, or one entry per stdin line when `args` is empty
pub fn collect_inputs(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read timestamps from stdin")
}

/// Reads a file, or stdin for `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read payload from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Built-in rules, extended or replaced by a rules file
pub fn load_rules(path: Option<&Path>, replace: bool) -> Result<FieldRules> {
    let Some(path) = path else {
        return Ok(FieldRules::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file {}", path.display()))?;
    let custom: FieldRules = serde_json::from_str(&text)
        .with_context(|| format!("Invalid rules file {}", path.display()))?;
    log::info!("Loaded {} field rule(s) from {}", custom.len(), path.display());

    if replace {
        return Ok(custom);
    }
    let mut rules = FieldRules::default();
    rules.extend(custom);
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utc_offset() {
        assert_eq!(parse_utc_offset("+05:30").unwrap().local_minus_utc(), 19_800);
        assert_eq!(parse_utc_offset("-0800").unwrap().local_minus_utc(), -28_800);
        assert_eq!(parse_utc_offset("Z").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_utc_offset("utc").unwrap().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_utc_offset_rejects_garbage() {
        assert!(parse_utc_offset("5").is_err());
        assert!(parse_utc_offset("+05:75").is_err());
        assert!(parse_utc_offset("+30:00").is_err());
        assert!(parse_utc_offset("Europe/Paris").is_err());
    }

    #[test]
    fn test_parse_utc_offset_repeated_calls() {
        for _ in 0..3 {
            assert_eq!(parse_utc_offset("+0545").unwrap().local_minus_utc(), 20_700);
            assert!(parse_utc_offset("+5:45").is_err());
        }
    }

    #[test]
    fn test_resolve_clock_pins_now() {
        let clock = resolve_clock(Some("2025-12-22T12:00:00Z")).unwrap();
        assert_eq!(clock.now().to_rfc3339(), "2025-12-22T12:00:00+00:00");
        assert!(resolve_clock(Some("yesterday")).is_err());
    }
}
