//! Precondition failures reported by the scoring core and request builders.

use thiserror::Error;

/// A caller-side contract violation. Never recovered internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// One of the daily arrays does not line up with the `time` array.
    #[error("daily series `{field}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Requested forecast horizon outside what the provider serves.
    #[error("day count must be between 0 and {max}, got {days}")]
    DayCount { days: i64, max: i64 },

    #[error("invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180")]
    Coordinates { latitude: f64, longitude: f64 },
}
