//! Bespoke calendar with caller-supplied holidays.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use super::provider::CalendarProvider;

/// A calendar of weekends plus explicitly declared holidays.
///
/// Some jurisdictions move a weekend day into the working week to bridge a
/// long holiday; those dates are registered with
/// [`with_makeup_day`](Self::with_makeup_day) and count as working days even
/// though they fall on a Saturday or Sunday.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    name: String,
    holidays: BTreeSet<NaiveDate>,
    makeup_days: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Creates a calendar where only weekends are non-working.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
            makeup_days: BTreeSet::new(),
        }
    }

    /// Adds a holiday.
    pub fn with_holiday(mut self, date: NaiveDate) -> Self {
        self.add_holiday(date);
        self
    }

    /// Adds every day of the inclusive range `[first, last]` as a holiday.
    pub fn with_holiday_range(mut self, first: NaiveDate, last: NaiveDate) -> Self {
        for day in first.iter_days().take_while(|d| *d <= last) {
            self.add_holiday(day);
        }
        self
    }

    /// Adds a compensatory working day.
    pub fn with_makeup_day(mut self, date: NaiveDate) -> Self {
        self.add_makeup_day(date);
        self
    }

    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    pub fn remove_holiday(&mut self, date: NaiveDate) {
        self.holidays.remove(&date);
    }

    pub fn add_makeup_day(&mut self, date: NaiveDate) {
        self.makeup_days.insert(date);
    }

    /// Number of declared holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl CalendarProvider for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_working_day(&self, date: NaiveDate) -> bool {
        if self.makeup_days.contains(&date) {
            return true;
        }
        !Self::is_weekend(date) && !self.holidays.contains(&date)
    }

    fn holidays(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        if start > end {
            return Vec::new();
        }
        self.holidays.range(start..=end).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_calendar_is_weekends_only() {
        let cal = HolidayCalendar::new("Test");
        assert_eq!(cal.name(), "Test");
        // Monday
        assert!(cal.is_working_day(date(2025, 3, 3)));
        // Saturday
        assert!(!cal.is_working_day(date(2025, 3, 1)));
        assert!(cal.holidays(date(2025, 1, 1), date(2025, 12, 31)).is_empty());
    }

    #[test]
    fn add_and_remove_holiday() {
        let mut cal = HolidayCalendar::new("Custom");
        let holiday = date(2025, 3, 14); // Friday
        assert!(cal.is_working_day(holiday));

        cal.add_holiday(holiday);
        assert!(!cal.is_working_day(holiday));
        assert_eq!(cal.holiday_count(), 1);

        cal.remove_holiday(holiday);
        assert!(cal.is_working_day(holiday));
        assert_eq!(cal.holiday_count(), 0);
    }

    #[test]
    fn makeup_day_overrides_weekend() {
        let saturday = date(2025, 10, 11);
        let cal = HolidayCalendar::new("Makeup").with_makeup_day(saturday);
        assert!(cal.is_working_day(saturday));
        assert!(!cal.is_working_day(date(2025, 10, 12)));
    }

    #[test]
    fn holiday_range_is_inclusive() {
        let cal =
            HolidayCalendar::new("Range").with_holiday_range(date(2025, 5, 1), date(2025, 5, 5));
        assert_eq!(cal.holiday_count(), 5);
        let listed = cal.holidays(date(2025, 5, 2), date(2025, 5, 3));
        assert_eq!(listed, vec![date(2025, 5, 2), date(2025, 5, 3)]);
    }

    #[test]
    fn working_days_skips_weekends_and_holidays() {
        let cal = HolidayCalendar::new("Week").with_holiday(date(2025, 3, 5));
        // Mon 3 .. Sun 9
        let days = cal.working_days(date(2025, 3, 3), date(2025, 3, 9));
        assert_eq!(
            days,
            vec![date(2025, 3, 3), date(2025, 3, 4), date(2025, 3, 6), date(2025, 3, 7)]
        );
    }

    #[test]
    fn reversed_range_is_empty() {
        let cal = HolidayCalendar::new("Rev").with_holiday(date(2025, 3, 5));
        assert!(cal.holidays(date(2025, 3, 9), date(2025, 3, 1)).is_empty());
        assert!(cal.working_days(date(2025, 3, 9), date(2025, 3, 1)).is_empty());
    }
}
