use chrono::NaiveDate;
use thiserror::Error;

use crate::calendar::CalendarError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TripError {
    #[error("Trip ends on {end} before it starts on {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("Trip of {0} days exceeds the two-day limit")]
    TooLong(i64),

    #[error("Trip needs one or two participants, got {0}")]
    ParticipantCount(usize),

    #[error("Participant '{0}' is listed twice")]
    DuplicateParticipant(String),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
