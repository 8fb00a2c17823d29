//! Clock, datetime, relative and duration command implementation

use std::fmt::Display;

use anyhow::Result;
use chrono::TimeZone;
use workeye_timefmt::{FieldStyle, TimeFormat};

use crate::helpers::collect_inputs;

/// Prints one formatted line per input; unparseable input is printed as-is
pub fn cmd_format<Tz>(style: FieldStyle, inputs: Vec<String>, fmt: &TimeFormat<Tz>) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    for raw in collect_inputs(inputs)? {
        let line = match fmt.try_format(style, Some(raw.as_str())) {
            Ok(formatted) => formatted,
            Err(err) => {
                log::warn!("{}", err);
                raw
            }
        };
        println!("{}", line);
    }
    Ok(())
}
