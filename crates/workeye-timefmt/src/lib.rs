//! Work Eye TimeFormat - Display formatting for dashboard timestamps
//!
//! The dashboard API serializes timestamps in several shapes (RFC 3339,
//! Python `isoformat()` without offset, naive `YYYY-MM-DD HH:MM:SS`, bare
//! `07:01 AM` clock times) and sentinel tokens such as `Unknown`. This crate
//! turns all of them into consistent local-time or relative-time strings.
//! Formatting never fails: anything unparseable is shown as-is.
//!
//! The display zone and the clock are injected through [`TimeFormat`]; the
//! `format_*` free functions use the wall clock and the process-local zone.

mod clock;
mod duration;
mod error;
mod format;
pub mod parse;
mod payload;
pub mod sentinel;

pub use clock::{Clock, FixedClock, SystemClock};
pub use duration::format_screen_time;
pub use error::TimeFormatError;
pub use format::TimeFormat;
pub use payload::{FieldRules, FieldStyle, RenderSummary};

/// Clock time in the local zone, e.g. `06:36 PM`
pub fn format_clock_time(raw: Option<&str>) -> String {
    TimeFormat::system().clock_time(raw)
}

/// `YYYY-MM-DD HH:MM:SS` in the local zone
pub fn format_date_time(raw: Option<&str>) -> String {
    TimeFormat::system().date_time(raw)
}

/// Relative phrase such as `3 minutes ago`
pub fn format_relative_time(raw: Option<&str>) -> String {
    TimeFormat::system().relative_time(raw)
}

pub fn format_screenshot_time(raw: Option<&str>) -> String {
    TimeFormat::system().screenshot_time(raw)
}

pub fn format_activity_time(raw: Option<&str>) -> String {
    TimeFormat::system().activity_time(raw)
}
