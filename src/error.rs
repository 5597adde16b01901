use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_YEAR};

/// Error type for constructing and parsing dates, spans and day kinds.
///
/// Calculations never fail; only turning raw numbers or text into validated
/// values can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Text did not match the expected layout.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Year outside the supported range.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),

    /// Month outside 1..=12.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day does not exist in the given month.
    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    /// Nothing to parse.
    #[error("Empty date string")]
    EmptyInput,

    /// A span was built with its start after its end.
    #[error("Invalid date span: start ({start}) is after end ({end})")]
    InvertedSpan { start: String, end: String },

    /// Unrecognised day kind name.
    #[error("Invalid day kind: '{0}' (expected 'consecutive' or 'business')")]
    InvalidKind(String),
}
