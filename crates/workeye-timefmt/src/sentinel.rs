//! Sentinel tokens that short-circuit formatting.
//!
//! Each entry point carries its own guard: the activity views show "Recent"
//! verbatim, while the relative-time column collapses every missing value
//! into "Never".

/// Reserved non-timestamp tokens the backend emits
pub const UNKNOWN: &str = "Unknown";
pub const NEVER: &str = "Never";
pub const RECENT: &str = "Recent";

/// Sentinel handling for one formatter entry point
#[derive(Debug, Clone, Copy)]
pub(crate) struct Guard {
    /// Returned for `None` and `""`
    empty: &'static str,
    /// Tokens that stop parsing
    tokens: &'static [&'static str],
    /// When set, matched tokens are replaced by `empty` instead of echoed
    collapse: bool,
}

/// Outcome of running a guard over a raw value
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Checked<'a> {
    Sentinel(String),
    Parse(&'a str),
}

pub(crate) const CLOCK_TIME: Guard = Guard {
    empty: UNKNOWN,
    tokens: &[UNKNOWN, NEVER, RECENT],
    collapse: false,
};

pub(crate) const DATE_TIME: Guard = Guard {
    empty: UNKNOWN,
    tokens: &[UNKNOWN, NEVER],
    collapse: false,
};

pub(crate) const RELATIVE_TIME: Guard = Guard {
    empty: NEVER,
    tokens: &[UNKNOWN, NEVER],
    collapse: true,
};

impl Guard {
    pub(crate) fn check<'a>(&self, raw: Option<&'a str>) -> Checked<'a> {
        match raw {
            None | Some("") => Checked::Sentinel(self.empty.to_string()),
            Some(s) if self.tokens.contains(&s) => {
                let out = if self.collapse { self.empty } else { s };
                Checked::Sentinel(out.to_string())
            }
            Some(s) => Checked::Parse(s),
        }
    }
}
