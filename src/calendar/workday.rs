//! Nearest-working-day arithmetic and the calendar data guard.

use chrono::{Datelike, NaiveDate};

use super::error::CalendarError;
use super::provider::CalendarProvider;

/// Upper bound on the days scanned when looking for a neighbouring working
/// day. A provider that reports no working day within a year is faulty.
pub const MAX_WORKDAY_SCAN: u32 = 366;

fn require_year_data<C>(calendar: &C, date: NaiveDate) -> Result<(), CalendarError>
where
    C: CalendarProvider + ?Sized,
{
    if calendar.has_year_data(date.year()) {
        Ok(())
    } else {
        Err(CalendarError::YearUnsupported {
            calendar: calendar.name().to_string(),
            year: date.year(),
        })
    }
}

/// Returns the nearest working day strictly before `date`.
///
/// # Errors
///
/// - `YearUnsupported` if the scan reaches a year the calendar has no data for
/// - `NoWorkingDayBefore` if nothing turns up within [`MAX_WORKDAY_SCAN`] days
pub fn previous_workday<C>(calendar: &C, date: NaiveDate) -> Result<NaiveDate, CalendarError>
where
    C: CalendarProvider + ?Sized,
{
    let mut current = date;
    for _ in 0..MAX_WORKDAY_SCAN {
        current = current.pred_opt().ok_or(CalendarError::OutOfRange(current))?;
        require_year_data(calendar, current)?;
        if calendar.is_working_day(current) {
            return Ok(current);
        }
    }
    Err(CalendarError::NoWorkingDayBefore {
        from: date,
        scanned: MAX_WORKDAY_SCAN,
    })
}

/// Returns the nearest working day strictly after `date`.
///
/// Fails like [`previous_workday`], scanning forwards.
pub fn next_workday<C>(calendar: &C, date: NaiveDate) -> Result<NaiveDate, CalendarError>
where
    C: CalendarProvider + ?Sized,
{
    let mut current = date;
    for _ in 0..MAX_WORKDAY_SCAN {
        current = current.succ_opt().ok_or(CalendarError::OutOfRange(current))?;
        require_year_data(calendar, current)?;
        if calendar.is_working_day(current) {
            return Ok(current);
        }
    }
    Err(CalendarError::NoWorkingDayAfter {
        from: date,
        scanned: MAX_WORKDAY_SCAN,
    })
}

/// Returns true if the calendar carries data for `year` and lists at least
/// one holiday in it.
pub fn is_year_supported<C>(calendar: &C, year: i32) -> bool
where
    C: CalendarProvider + ?Sized,
{
    if !calendar.has_year_data(year) {
        return false;
    }
    match (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) {
        (Some(start), Some(end)) => !calendar.holidays(start, end).is_empty(),
        _ => false,
    }
}

/// Refuses years for which the calendar carries no holiday data.
///
/// A year without a single gazetted holiday means the arrangements were not
/// published yet (or the data source is stale), so any working-day list
/// derived from it would be wrong.
pub fn check_year_support<C>(calendar: &C, year: i32) -> Result<(), CalendarError>
where
    C: CalendarProvider + ?Sized,
{
    if is_year_supported(calendar, year) {
        Ok(())
    } else {
        Err(CalendarError::YearUnsupported {
            calendar: calendar.name().to_string(),
            year,
        })
    }
}
