//! Display formatters built on the parser cascade

use std::fmt;

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

use crate::clock::{Clock, SystemClock};
use crate::duration::format_screen_time;
use crate::error::TimeFormatError;
use crate::parse::{self, Context, Shape, ABSOLUTE_CASCADE, DATE_TIME_CASCADE};
use crate::payload::FieldStyle;
use crate::sentinel::{self, Checked, Guard};

const CLOCK_TIME_FORMAT: &str = "%I:%M %p";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const ABSOLUTE_SAME_YEAR_FORMAT: &str = "%b %-d, %-I:%M %p";
const ABSOLUTE_OTHER_YEAR_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

/// Timestamp formatter bound to a display zone and a source of "now".
///
/// Every call reads the clock at most once. The infallible methods never
/// fail: unparseable input comes back unchanged.
pub struct TimeFormat<Tz: TimeZone = Local> {
    zone: Tz,
    clock: Box<dyn Clock>,
}

impl TimeFormat<Local> {
    /// Formatter using the wall clock and the process-local zone
    pub fn system() -> Self {
        Self::new(Local, SystemClock)
    }
}

impl Default for TimeFormat<Local> {
    fn default() -> Self {
        Self::system()
    }
}

impl<Tz> TimeFormat<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    pub fn new(zone: Tz, clock: impl Clock + 'static) -> Self {
        Self {
            zone,
            clock: Box::new(clock),
        }
    }

    pub fn zone(&self) -> &Tz {
        &self.zone
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Runs the full four-shape cascade over a non-sentinel string
    pub fn parse(&self, raw: &str) -> Result<DateTime<Utc>, TimeFormatError> {
        self.parse_shapes(raw, ABSOLUTE_CASCADE)
    }

    /// 12-hour clock time in the display zone, e.g. `06:36 AM`
    pub fn clock_time(&self, raw: Option<&str>) -> String {
        self.try_clock_time(raw).unwrap_or_else(echo)
    }

    /// `YYYY-MM-DD HH:MM:SS` in the display zone
    pub fn date_time(&self, raw: Option<&str>) -> String {
        self.try_date_time(raw).unwrap_or_else(echo)
    }

    /// "Just now", "N minutes ago", ... or an absolute date once older than two days
    pub fn relative_time(&self, raw: Option<&str>) -> String {
        self.try_relative_time(raw).unwrap_or_else(echo)
    }

    /// Screenshot capture timestamps
    pub fn screenshot_time(&self, raw: Option<&str>) -> String {
        self.date_time(raw)
    }

    /// Activity log timestamps
    pub fn activity_time(&self, raw: Option<&str>) -> String {
        self.clock_time(raw)
    }

    pub fn try_clock_time(&self, raw: Option<&str>) -> Result<String, TimeFormatError> {
        let raw = match guard(sentinel::CLOCK_TIME, raw) {
            Ok(raw) => raw,
            Err(out) => return Ok(out),
        };
        let instant = self.parse_shapes(raw, ABSOLUTE_CASCADE)?;
        Ok(self.in_zone(instant).format(CLOCK_TIME_FORMAT).to_string())
    }

    pub fn try_date_time(&self, raw: Option<&str>) -> Result<String, TimeFormatError> {
        let raw = match guard(sentinel::DATE_TIME, raw) {
            Ok(raw) => raw,
            Err(out) => return Ok(out),
        };
        let instant = self.parse_shapes(raw, DATE_TIME_CASCADE)?;
        Ok(self.in_zone(instant).format(DATE_TIME_FORMAT).to_string())
    }

    /// Unlike the absolute formatters this only uses the generic parser, so
    /// naive `YYYY-MM-DD HH:MM:SS` values are read in the display zone rather
    /// than UTC and bare clock times do not parse.
    pub fn try_relative_time(&self, raw: Option<&str>) -> Result<String, TimeFormatError> {
        let raw = match guard(sentinel::RELATIVE_TIME, raw) {
            Ok(raw) => raw,
            Err(out) => return Ok(out),
        };
        let now = self.clock.now();
        let instant = parse::parse_generic(raw, &self.zone)
            .ok_or_else(|| TimeFormatError::unparseable(raw, "not a recognized date"))?;
        Ok(self.describe_elapsed(instant, now))
    }

    /// Formats `raw` according to a payload field rule
    pub fn try_format(&self, style: FieldStyle, raw: Option<&str>) -> Result<String, TimeFormatError> {
        match style {
            FieldStyle::Clock => self.try_clock_time(raw),
            FieldStyle::DateTime => self.try_date_time(raw),
            FieldStyle::Relative => self.try_relative_time(raw),
            FieldStyle::Duration => {
                let text = raw.unwrap_or_default();
                text.trim()
                    .parse::<f64>()
                    .map(format_screen_time)
                    .map_err(|_| TimeFormatError::unparseable(text, "not a number of seconds"))
            }
        }
    }

    fn parse_shapes(&self, raw: &str, cascade: &[Shape]) -> Result<DateTime<Utc>, TimeFormatError> {
        let ctx = Context {
            now: self.clock.now(),
            zone: &self.zone,
        };
        parse::parse_with(raw, cascade, &ctx)
    }

    fn in_zone(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.zone)
    }

    fn describe_elapsed(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let seconds = (now - instant).num_milliseconds().div_euclid(1000);
        if seconds < 60 {
            return if seconds <= 5 {
                "Just now".to_string()
            } else {
                ago(seconds, "second")
            };
        }

        let minutes = seconds / 60;
        if minutes < 60 {
            return ago(minutes, "minute");
        }
        let hours = minutes / 60;
        if hours < 24 {
            return ago(hours, "hour");
        }
        let days = hours / 24;
        if days <= 2 {
            return ago(days, "day");
        }

        let local = self.in_zone(instant);
        let format = if local.year() == self.in_zone(now).year() {
            ABSOLUTE_SAME_YEAR_FORMAT
        } else {
            ABSOLUTE_OTHER_YEAR_FORMAT
        };
        local.format(format).to_string()
    }
}

/// `Ok` carries the string to parse, `Err` the sentinel output
fn guard(guard: Guard, raw: Option<&str>) -> Result<&str, String> {
    match guard.check(raw) {
        Checked::Parse(raw) => Ok(raw),
        Checked::Sentinel(out) => Err(out),
    }
}

fn echo(err: TimeFormatError) -> String {
    log::debug!("{}; showing raw value", err);
    match err {
        TimeFormatError::Unparseable { raw, .. } => raw,
    }
}

fn ago(n: i64, unit: &str) -> String {
    format!("{} {}{} ago", n, unit, if n == 1 { "" } else { "s" })
}
