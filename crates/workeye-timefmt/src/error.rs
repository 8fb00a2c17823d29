//! Error types for workeye-timefmt

/// Errors raised while turning a raw timestamp into an instant.
///
/// The infallible formatters never return this; they echo the raw input
/// instead. It is only visible through the `try_*` variants and
/// [`TimeFormat::parse`](crate::TimeFormat::parse).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeFormatError {
    #[error("Unparseable timestamp {raw:?}: {reason}")]
    Unparseable { raw: String, reason: &'static str },
}

impl TimeFormatError {
    pub(crate) fn unparseable(raw: &str, reason: &'static str) -> Self {
        Self::Unparseable {
            raw: raw.to_string(),
            reason,
        }
    }

    /// The raw input that failed to parse
    pub fn raw(&self) -> &str {
        match self {
            Self::Unparseable { raw, .. } => raw,
        }
    }
}
