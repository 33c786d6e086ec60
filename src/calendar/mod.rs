//! Working-day calendars and the arithmetic built on them.
//!
//! A [`CalendarProvider`] answers two questions for one jurisdiction: whether a
//! date is a working day, and which gazetted holidays fall inside a range.
//! Everything else in the crate (quarter windows, approval and reimbursement
//! dates, the year guard) is derived from those two answers.
//!
//! # Providers
//!
//! - [`HolidayCalendar`] - weekends plus an explicit holiday set, with optional
//!   compensatory weekend working days.
//! - [`ChinaCalendar`] - the official mainland China calendar for the years
//!   with published holiday arrangements.

mod china;
mod error;
mod holiday;
mod provider;
mod workday;

pub use china::ChinaCalendar;
pub use error::CalendarError;
pub use holiday::HolidayCalendar;
pub use provider::CalendarProvider;
pub use workday::{
    check_year_support, is_year_supported, next_workday, previous_workday, MAX_WORKDAY_SCAN,
};
