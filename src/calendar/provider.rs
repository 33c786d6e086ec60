//! Calendar provider trait definition.

use std::fmt::Debug;

use chrono::NaiveDate;

/// A jurisdiction's official working-day calendar.
///
/// Implementations are expected to be pure: the same date always yields the
/// same answer for the lifetime of a scheduling run. Remote or slow sources
/// should be cached before they are handed to the planner.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use tripsync::calendar::{CalendarProvider, HolidayCalendar};
///
/// let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let calendar = HolidayCalendar::new("office").with_holiday(new_year);
///
/// assert!(!calendar.is_working_day(new_year));
/// assert_eq!(calendar.holidays(new_year, new_year), vec![new_year]);
/// ```
pub trait CalendarProvider: Debug {
    /// Returns a human-readable name for this calendar.
    fn name(&self) -> &str;

    /// Returns true if `date` is a working day.
    fn is_working_day(&self, date: NaiveDate) -> bool;

    /// Returns the gazetted holidays in `[start, end]`, ascending.
    ///
    /// Plain weekends are not holidays; only officially declared days are
    /// listed.
    fn holidays(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate>;

    /// Returns true if working-day answers for `year` are authoritative.
    ///
    /// Calendars backed by published data return false outside the years
    /// they carry; workday arithmetic refuses to cross into those years.
    fn has_year_data(&self, _year: i32) -> bool {
        true
    }

    /// Returns every working day in `[start, end]`, ascending.
    fn working_days(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        if start > end {
            return Vec::new();
        }
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| self.is_working_day(*d))
            .collect()
    }
}

impl<C: CalendarProvider + ?Sized> CalendarProvider for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_working_day(&self, date: NaiveDate) -> bool {
        (**self).is_working_day(date)
    }

    fn holidays(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        (**self).holidays(start, end)
    }

    fn has_year_data(&self, year: i32) -> bool {
        (**self).has_year_data(year)
    }
}
