//! Plain-text tables for the console.

use chrono::NaiveDate;

use crate::registry::Fulfillment;
use crate::trip::TripEvent;

const RULE_WIDTH: usize = 85;

/// `10-10` for a one-day trip, `10-10 ~ 10-11` for a two-day trip.
pub fn format_date_range(event: &TripEvent) -> String {
    if event.days_count() > 1 {
        format!(
            "{} ~ {}",
            event.start_date().format("%m-%d"),
            event.end_date().format("%m-%d")
        )
    } else {
        event.start_date().format("%m-%d").to_string()
    }
}

/// `10-10 Fri`, as listed when picking blackout dates.
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%m-%d %a").to_string()
}

/// `done` when the target is met, `short N` otherwise.
pub fn status_label(person: &Fulfillment) -> String {
    match person.shortfall() {
        0 => "done".to_string(),
        n => format!("short {}", n),
    }
}

fn event_row(dates: &str, days: &str, travellers: &str, approval: &str, reimburse: &str) -> String {
    format!(
        "{:<16} | {:<4} | {:<24} | {:<10} | {:<10}\n",
        dates, days, travellers, approval, reimburse
    )
}

fn fulfillment_row(name: &str, target: &str, actual: &str, status: &str) -> String {
    format!("{:<16} {:>6} {:>6}  {}\n", name, target, actual, status)
}

/// Renders the trip table, one event per row.
pub fn render_events(events: &[TripEvent]) -> String {
    let rule = format!("{}\n", "=".repeat(RULE_WIDTH));
    let mut out = rule.clone();
    out.push_str(&event_row("Dates", "Days", "Travellers", "Approval", "Reimburse"));
    out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));
    for event in events {
        out.push_str(&event_row(
            &format_date_range(event),
            &event.days_count().to_string(),
            &event.participants().join(" & "),
            &event.approval_date().format("%m-%d").to_string(),
            &event.reimburse_date().format("%m-%d").to_string(),
        ));
    }
    out.push_str(&rule);
    out
}

/// Renders final counts per person in input order.
pub fn render_fulfillment(people: &[Fulfillment]) -> String {
    let mut out = fulfillment_row("Name", "Target", "Actual", "Status");
    for p in people {
        out.push_str(&fulfillment_row(
            &p.name,
            &p.target_count.to_string(),
            &p.current_count.to_string(),
            &status_label(p),
        ));
    }
    out
}
