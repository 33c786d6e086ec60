//! Trip events produced by a scheduling run.

mod error;
mod factory;

pub use error::TripError;
pub use factory::TripEventFactory;

use chrono::NaiveDate;

use crate::Id;

/// Longest trip the planner creates, in days.
pub const MAX_TRIP_DAYS: u32 = 2;

/// One committed trip: one or two people travelling on one or two
/// consecutive days.
///
/// The approval date is the last working day before departure and the
/// reimbursement date the first working day after return. Events are
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TripEvent {
    start_date: NaiveDate,
    end_date: NaiveDate,
    participants: Vec<Id>,
    days_count: u32,
    approval_date: NaiveDate,
    reimburse_date: NaiveDate,
}

impl TripEvent {
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn participants(&self) -> &[Id] {
        &self.participants
    }

    pub fn days_count(&self) -> u32 {
        self.days_count
    }

    pub fn approval_date(&self) -> NaiveDate {
        self.approval_date
    }

    pub fn reimburse_date(&self) -> NaiveDate {
        self.reimburse_date
    }

    pub fn is_solo(&self) -> bool {
        self.participants.len() == 1
    }

    /// Returns true if `date` is one of the travel days.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Travel days, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date.iter_days().take_while(move |d| *d <= self.end_date)
    }

    pub fn includes(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn span_queries() {
        let cal = HolidayCalendar::new("plain");
        let trip = TripEventFactory::new(&cal)
            .build(date(10), date(11), vec!["A".to_string(), "B".to_string()])
            .unwrap();
        assert!(!trip.covers(date(7)));
        assert!(trip.covers(date(10)));
        assert!(trip.covers(date(11)));
        assert!(!trip.covers(date(12)));
        assert_eq!(trip.dates().collect::<Vec<_>>(), vec![date(10), date(11)]);
        assert!(trip.includes("B"));
        assert!(!trip.includes("C"));
        assert!(!trip.is_solo());
    }
}
