//! Official mainland China working-day calendar.
//!
//! Holiday arrangements are published by the State Council once a year, so
//! only years with a published notice carry data. For any other year the
//! calendar degrades to weekends-only and reports no holidays, which the
//! year guard treats as missing data. Workday arithmetic refuses to step
//! into such a year.

use chrono::NaiveDate;

use super::holiday::HolidayCalendar;
use super::provider::CalendarProvider;

type Ymd = (i32, u32, u32);

/// Official holiday breaks, inclusive `(first, last)`.
const HOLIDAY_BREAKS: &[(Ymd, Ymd)] = &[
    // 2022
    ((2022, 1, 1), (2022, 1, 3)),
    ((2022, 1, 31), (2022, 2, 6)),
    ((2022, 4, 3), (2022, 4, 5)),
    ((2022, 4, 30), (2022, 5, 4)),
    ((2022, 6, 3), (2022, 6, 5)),
    ((2022, 9, 10), (2022, 9, 12)),
    ((2022, 10, 1), (2022, 10, 7)),
    // 2023, New Year break starts on 2022-12-31
    ((2022, 12, 31), (2023, 1, 2)),
    ((2023, 1, 21), (2023, 1, 27)),
    ((2023, 4, 5), (2023, 4, 5)),
    ((2023, 4, 29), (2023, 5, 3)),
    ((2023, 6, 22), (2023, 6, 24)),
    ((2023, 9, 29), (2023, 10, 6)),
    // 2024
    ((2024, 1, 1), (2024, 1, 1)),
    ((2024, 2, 10), (2024, 2, 17)),
    ((2024, 4, 4), (2024, 4, 6)),
    ((2024, 5, 1), (2024, 5, 5)),
    ((2024, 6, 8), (2024, 6, 10)),
    ((2024, 9, 15), (2024, 9, 17)),
    ((2024, 10, 1), (2024, 10, 7)),
    // 2025
    ((2025, 1, 1), (2025, 1, 1)),
    ((2025, 1, 28), (2025, 2, 4)),
    ((2025, 4, 4), (2025, 4, 6)),
    ((2025, 5, 1), (2025, 5, 5)),
    ((2025, 5, 31), (2025, 6, 2)),
    ((2025, 10, 1), (2025, 10, 8)),
    // 2026
    ((2026, 1, 1), (2026, 1, 3)),
    ((2026, 2, 15), (2026, 2, 23)),
    ((2026, 4, 4), (2026, 4, 6)),
    ((2026, 5, 1), (2026, 5, 5)),
    ((2026, 6, 19), (2026, 6, 21)),
    ((2026, 9, 25), (2026, 9, 27)),
    ((2026, 10, 1), (2026, 10, 7)),
];

/// Weekend days worked in exchange for a holiday break.
const MAKEUP_WORKDAYS: &[Ymd] = &[
    // 2022
    (2022, 1, 29),
    (2022, 1, 30),
    (2022, 4, 2),
    (2022, 4, 24),
    (2022, 5, 7),
    (2022, 10, 8),
    (2022, 10, 9),
    // 2023
    (2023, 1, 28),
    (2023, 1, 29),
    (2023, 4, 23),
    (2023, 5, 6),
    (2023, 6, 25),
    (2023, 10, 7),
    (2023, 10, 8),
    // 2024
    (2024, 2, 4),
    (2024, 2, 18),
    (2024, 4, 7),
    (2024, 4, 28),
    (2024, 5, 11),
    (2024, 9, 14),
    (2024, 9, 29),
    (2024, 10, 12),
    // 2025
    (2025, 1, 26),
    (2025, 2, 8),
    (2025, 4, 27),
    (2025, 9, 28),
    (2025, 10, 11),
    // 2026
    (2026, 1, 4),
    (2026, 2, 14),
    (2026, 2, 28),
    (2026, 5, 9),
    (2026, 9, 20),
    (2026, 10, 10),
];

fn to_date((y, m, d): Ymd) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// The official mainland China calendar.
#[derive(Debug, Clone)]
pub struct ChinaCalendar {
    inner: HolidayCalendar,
}

impl ChinaCalendar {
    pub fn new() -> Self {
        let mut inner = HolidayCalendar::new("CN");
        for &(first, last) in HOLIDAY_BREAKS {
            if let (Some(first), Some(last)) = (to_date(first), to_date(last)) {
                inner = inner.with_holiday_range(first, last);
            }
        }
        for &day in MAKEUP_WORKDAYS {
            if let Some(day) = to_date(day) {
                inner.add_makeup_day(day);
            }
        }
        Self { inner }
    }

    /// First and last year with published holiday data.
    pub fn data_years() -> (i32, i32) {
        let years = HOLIDAY_BREAKS.iter().map(|(_, (y, _, _))| *y);
        let first = years.clone().min().unwrap_or_default();
        let last = years.max().unwrap_or_default();
        (first, last)
    }
}

impl Default for ChinaCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarProvider for ChinaCalendar {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_working_day(&self, date: NaiveDate) -> bool {
        self.inner.is_working_day(date)
    }

    fn holidays(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        self.inner.holidays(start, end)
    }

    fn has_year_data(&self, year: i32) -> bool {
        let (first, last) = Self::data_years();
        (first..=last).contains(&year)
    }
}
