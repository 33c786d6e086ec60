use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by calendar lookups and workday arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Calendar '{calendar}' has no holiday data for year {year}")]
    YearUnsupported { calendar: String, year: i32 },

    #[error("No working day found within {scanned} days before {from}")]
    NoWorkingDayBefore { from: NaiveDate, scanned: u32 },

    #[error("No working day found within {scanned} days after {from}")]
    NoWorkingDayAfter { from: NaiveDate, scanned: u32 },

    #[error("Date arithmetic left the supported range at {0}")]
    OutOfRange(NaiveDate),
}
