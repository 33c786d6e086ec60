//! Presentation of a finished plan.
//!
//! # Module Structure
//!
//! - [`table`] - Console tables for events and per-person fulfilment
//! - [`csv`] - Spreadsheet-friendly CSV export

pub mod csv;
pub mod errors;
pub mod table;

pub use self::csv::{default_file_name, export_events, write_events};
pub use errors::ReportError;
pub use table::{
    format_date_range, format_day_label, render_events, render_fulfillment, status_label,
};
