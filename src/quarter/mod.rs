//! Calendar quarters and their schedulable working days.
//!
//! A [`QuarterWindow`] fixes the inclusive date range of one quarter and
//! caches the provider's working days inside it, so the allocation engine never
//! queries the calendar per candidate day.
//!
//! The first and last working day of a quarter overlap with the neighbouring
//! quarters' closing and opening paperwork, so the *schedulable* days exclude
//! them whenever at least three working days exist.

mod error;

pub use error::QuarterError;

use chrono::NaiveDate;

use crate::calendar::CalendarProvider;

/// Inclusive date range of a calendar quarter with its working days.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuarterWindow {
    year: i32,
    quarter: u32,
    start: NaiveDate,
    end: NaiveDate,
    working_days: Vec<NaiveDate>,
}

impl QuarterWindow {
    /// Computes the window for `year`/`quarter` against `calendar`.
    ///
    /// # Errors
    ///
    /// - `InvalidQuarter` if `quarter` is not in `1..=4`
    /// - `InvalidYear` if the quarter bounds are not representable
    pub fn new<C>(year: i32, quarter: u32, calendar: &C) -> Result<Self, QuarterError>
    where
        C: CalendarProvider + ?Sized,
    {
        let (start, end) = Self::bounds(year, quarter)?;
        Ok(Self {
            year,
            quarter,
            start,
            end,
            working_days: calendar.working_days(start, end),
        })
    }

    /// Returns the first and last calendar day of the quarter.
    pub fn bounds(year: i32, quarter: u32) -> Result<(NaiveDate, NaiveDate), QuarterError> {
        if !(1..=4).contains(&quarter) {
            return Err(QuarterError::InvalidQuarter(quarter));
        }
        let start_month = (quarter - 1) * 3 + 1;
        let start = NaiveDate::from_ymd_opt(year, start_month, 1)
            .ok_or(QuarterError::InvalidYear(year))?;
        // Day before the first day of the following quarter; Q4 rolls into next year.
        let next_start = if quarter == 4 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, start_month + 3, 1)
        };
        let end = next_start
            .and_then(|d| d.pred_opt())
            .ok_or(QuarterError::InvalidYear(year))?;
        Ok((start, end))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn quarter(&self) -> u32 {
        self.quarter
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` lies within the quarter's calendar range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// All working days of the quarter, ascending.
    pub fn working_days(&self) -> &[NaiveDate] {
        &self.working_days
    }

    /// Working days minus the quarter's first and last working day.
    ///
    /// Lists of two or fewer working days are returned unchanged.
    pub fn schedulable_days(&self) -> &[NaiveDate] {
        let n = self.working_days.len();
        if n > 2 {
            &self.working_days[1..n - 1]
        } else {
            &self.working_days
        }
    }

    /// Selects [`schedulable_days`](Self::schedulable_days) or the full list.
    pub fn days(&self, trim_edges: bool) -> &[NaiveDate] {
        if trim_edges {
            self.schedulable_days()
        } else {
            self.working_days()
        }
    }
}
