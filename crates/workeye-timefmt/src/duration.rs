//! Screen-time durations

/// Formats a number of seconds for the screen-time columns
///
/// Fractions are truncated; negative, NaN and infinite values show as `0s`.
pub fn format_screen_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0s".to_string();
    }
    let secs = seconds as u64;

    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}
