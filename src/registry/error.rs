use chrono::NaiveDate;
use thiserror::Error;

/// Invalid participant input, rejected before any allocation starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersonError {
    #[error("Person name cannot be empty")]
    EmptyName,

    #[error("Person '{0}' appears more than once")]
    DuplicateName(String),

    #[error("Person '{0}' must request at least one trip day")]
    NonPositiveTarget(String),

    #[error("Blackout date {date} for '{name}' is outside the quarter")]
    BlackoutOutsideQuarter { name: String, date: NaiveDate },

    #[error("Cannot parse blackout date '{0}' (expected MM-DD or YYYY-MM-DD)")]
    InvalidBlackout(String),
}
