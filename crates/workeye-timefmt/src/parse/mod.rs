//! Timestamp shape detection – ordered cascade, first match wins.
//!
//! Primary entry point: [`TimeFormat::parse`](crate::TimeFormat::parse)
//!
//! Flow:
//!   1. `Iso`       – contains `T` or `Z`, handed to the generic parser
//!   2. `NaiveUtc`  – `YYYY-MM-DD HH:MM:SS`, fields read as UTC
//!   3. `ClockTime` – `H:MM AM/PM`, a time of day on today's UTC date
//!   4. `Fallback`  – anything else, handed to the generic parser

mod generic;

use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use regex::{Captures, Regex};

use crate::error::TimeFormatError;

pub use generic::parse_generic;

static NAIVE_UTC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2}) ([0-9]{2}):([0-9]{2}):([0-9]{2})$")
        .expect("naive timestamp pattern is valid")
});

static CLOCK_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2}):([0-9]{2})\s?(AM|PM)$").expect("clock time pattern is valid")
});

/// One recognized timestamp layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Iso,
    NaiveUtc,
    ClockTime,
    Fallback,
}

/// Cascade used by the clock-time formatter and [`TimeFormat::parse`](crate::TimeFormat::parse)
pub const ABSOLUTE_CASCADE: &[Shape] = &[Shape::Iso, Shape::NaiveUtc, Shape::ClockTime, Shape::Fallback];

/// Cascade used by the date-time formatter; a bare clock time is not a date
pub const DATE_TIME_CASCADE: &[Shape] = &[Shape::Iso, Shape::NaiveUtc, Shape::Fallback];

/// Inputs every extractor may read
pub(crate) struct Context<'a, Tz: TimeZone> {
    pub now: DateTime<Utc>,
    pub zone: &'a Tz,
}

impl Shape {
    pub fn matches(self, raw: &str) -> bool {
        match self {
            Shape::Iso => raw.contains('T') || raw.contains('Z'),
            Shape::NaiveUtc => NAIVE_UTC.is_match(raw),
            Shape::ClockTime => CLOCK_TIME.is_match(raw),
            Shape::Fallback => true,
        }
    }

    pub(crate) fn extract<Tz: TimeZone>(
        self,
        raw: &str,
        ctx: &Context<'_, Tz>,
    ) -> Result<DateTime<Utc>, TimeFormatError> {
        match self {
            Shape::Iso | Shape::Fallback => parse_generic(raw, ctx.zone)
                .ok_or_else(|| TimeFormatError::unparseable(raw, "not a recognized date")),
            Shape::NaiveUtc => extract_naive_utc(raw),
            Shape::ClockTime => extract_clock_time(raw, ctx.now),
        }
    }
}

/// Returns the first shape in `cascade` that claims `raw`
pub fn detect(raw: &str, cascade: &[Shape]) -> Shape {
    cascade
        .iter()
        .copied()
        .find(|shape| shape.matches(raw))
        .unwrap_or(Shape::Fallback)
}

pub(crate) fn parse_with<Tz: TimeZone>(
    raw: &str,
    cascade: &[Shape],
    ctx: &Context<'_, Tz>,
) -> Result<DateTime<Utc>, TimeFormatError> {
    let shape = detect(raw, cascade);
    log::trace!("{:?} → {:?}", raw, shape);
    shape.extract(raw, ctx)
}

fn field<T: std::str::FromStr>(caps: &Captures<'_>, i: usize) -> Option<T> {
    caps.get(i).and_then(|m| m.as_str().parse().ok())
}

fn extract_naive_utc(raw: &str) -> Result<DateTime<Utc>, TimeFormatError> {
    let caps = NAIVE_UTC
        .captures(raw)
        .ok_or_else(|| TimeFormatError::unparseable(raw, "naive timestamp capture failed"))?;

    let fields = (|| {
        Some((
            field::<i32>(&caps, 1)?,
            field::<u32>(&caps, 2)?,
            field::<u32>(&caps, 3)?,
            field::<u32>(&caps, 4)?,
            field::<u32>(&caps, 5)?,
            field::<u32>(&caps, 6)?,
        ))
    })();
    let (year, month, day, hour, minute, second) =
        fields.ok_or_else(|| TimeFormatError::unparseable(raw, "naive timestamp capture failed"))?;

    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .ok_or_else(|| TimeFormatError::unparseable(raw, "date fields out of range"))
}

fn extract_clock_time(raw: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, TimeFormatError> {
    let caps = CLOCK_TIME
        .captures(raw)
        .ok_or_else(|| TimeFormatError::unparseable(raw, "clock time capture failed"))?;

    let (hour, minute) = match (field::<u32>(&caps, 1), field::<u32>(&caps, 2)) {
        (Some(h), Some(m)) => (h, m),
        _ => return Err(TimeFormatError::unparseable(raw, "clock time capture failed")),
    };
    let pm = caps
        .get(3)
        .map(|m| m.as_str().eq_ignore_ascii_case("PM"))
        .unwrap_or(false);

    // 12 AM is midnight, 12 PM is noon
    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    now.date_naive()
        .and_hms_opt(hour, minute, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimeFormatError::unparseable(raw, "clock time out of range"))
}
