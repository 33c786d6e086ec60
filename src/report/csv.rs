//! CSV export of trip events.
//!
//! Files start with a UTF-8 byte order mark so spreadsheet tools pick the
//! right encoding for non-ASCII names.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::errors::ReportError;
use crate::trip::TripEvent;

/// Byte order mark written ahead of the header row.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const HEADER: [&str; 5] = [
    "Trip dates",
    "Days",
    "Travellers",
    "Approval date",
    "Reimbursement date",
];

/// `travel_schedule_2025_Q4.csv`
pub fn default_file_name(year: i32, quarter: u32) -> String {
    format!("travel_schedule_{}_Q{}.csv", year, quarter)
}

fn record(event: &TripEvent) -> [String; 5] {
    let mut dates = event.start_date().format("%Y/%m/%d").to_string();
    if event.days_count() > 1 {
        dates.push('-');
        dates.push_str(&event.end_date().format("%m/%d").to_string());
    }
    [
        dates,
        event.days_count().to_string(),
        event.participants().join(","),
        event.approval_date().format("%Y/%m/%d").to_string(),
        event.reimburse_date().format("%Y/%m/%d").to_string(),
    ]
}

/// Writes the BOM, a header row and one row per event to `out`.
pub fn write_events<W: Write>(mut out: W, events: &[TripEvent]) -> Result<(), ReportError> {
    out.write_all(UTF8_BOM)?;
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;
    for event in events {
        writer.write_record(record(event))?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the events to it.
pub fn export_events(path: impl AsRef<Path>, events: &[TripEvent]) -> Result<(), ReportError> {
    let file = File::create(path)?;
    write_events(BufWriter::new(file), events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ChinaCalendar;
    use crate::trip::TripEventFactory;
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn events() -> Vec<TripEvent> {
        let cal = ChinaCalendar::new();
        let factory = TripEventFactory::new(&cal);
        vec![
            factory
                .build(date(10, 13), date(10, 14), vec!["Li".into(), "Cong".into()])
                .unwrap(),
            factory.build(date(10, 10), date(10, 10), vec!["Jinwu".into()]).unwrap(),
        ]
    }

    #[test]
    fn file_name() {
        assert_eq!(default_file_name(2025, 4), "travel_schedule_2025_Q4.csv");
    }

    #[test]
    fn rows_carry_bom_and_dates() {
        let mut buf = Vec::new();
        write_events(&mut buf, &events()).unwrap();
        assert!(buf.starts_with(UTF8_BOM));

        let text = String::from_utf8(buf[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Trip dates,Days,Travellers,Approval date,Reimbursement date");
        assert_eq!(lines[1], "2025/10/13-10/14,2,\"Li,Cong\",2025/10/11,2025/10/15");
        assert_eq!(lines[2], "2025/10/10,1,Jinwu,2025/10/09,2025/10/11");
    }

    #[test]
    fn empty_export_has_header() {
        let mut buf = Vec::new();
        write_events(&mut buf, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.trim_start_matches('\u{feff}').lines().count(), 1);
    }
}
