//! Trip event construction.

use chrono::NaiveDate;

use super::error::TripError;
use super::{TripEvent, MAX_TRIP_DAYS};
use crate::calendar::{next_workday, previous_workday, CalendarProvider};
use crate::Id;

/// Builds [`TripEvent`]s, deriving the approval and reimbursement dates from
/// a calendar.
#[derive(Debug, Clone, Copy)]
pub struct TripEventFactory<'a, C: CalendarProvider + ?Sized> {
    calendar: &'a C,
}

impl<'a, C: CalendarProvider + ?Sized> TripEventFactory<'a, C> {
    pub fn new(calendar: &'a C) -> Self {
        Self { calendar }
    }

    /// Creates a trip covering `[start, end]` for `participants`.
    ///
    /// # Errors
    ///
    /// - `EndBeforeStart` / `TooLong` for spans outside one or two days
    /// - `ParticipantCount` / `DuplicateParticipant` for anything but one
    ///   person or two distinct people
    /// - `Calendar` if the provider yields no neighbouring working day
    pub fn build(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        participants: Vec<Id>,
    ) -> Result<TripEvent, TripError> {
        if end < start {
            return Err(TripError::EndBeforeStart { start, end });
        }
        let days_count = (end - start).num_days() + 1;
        if days_count > i64::from(MAX_TRIP_DAYS) {
            return Err(TripError::TooLong(days_count));
        }
        match participants.as_slice() {
            [_] => {}
            [a, b] if a == b => return Err(TripError::DuplicateParticipant(a.clone())),
            [_, _] => {}
            other => return Err(TripError::ParticipantCount(other.len())),
        }

        Ok(TripEvent {
            start_date: start,
            end_date: end,
            participants,
            days_count: days_count as u32,
            approval_date: previous_workday(self.calendar, start)?,
            reimburse_date: next_workday(self.calendar, end)?,
        })
    }
}
