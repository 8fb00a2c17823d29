//! Output formatting structures for CLI display

use tabled::Tabled;

/// Table row comparing every display format of one raw timestamp
#[derive(Tabled)]
pub struct TimestampRow {
    #[tabled(rename = "Raw")]
    pub raw: String,
    #[tabled(rename = "Clock")]
    pub clock: String,
    #[tabled(rename = "Date-Time")]
    pub date_time: String,
    #[tabled(rename = "Relative")]
    pub relative: String,
}
