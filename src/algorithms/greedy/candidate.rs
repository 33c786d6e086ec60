//! Candidate day search against the ledger and blackout dates.

use crate::occupancy::OccupancyLedger;
use crate::registry::{PersonIdx, PersonRegistry};

use super::ordering::Pair;

/// Returns true if `pair` may travel on every day of `span`.
///
/// Every day must accept a pair, be outside both blackout sets, and not
/// already list either person. Presence is checked over the whole span, not
/// just its first day.
pub fn span_accepts(
    ledger: &OccupancyLedger,
    registry: &PersonRegistry,
    pair: Pair,
    span: &[usize],
) -> bool {
    span.iter().all(|&day| {
        let Some(date) = ledger.day(day) else {
            return false;
        };
        ledger.can_host_pair(day)
            && pair
                .members()
                .iter()
                .all(|&p| !registry.is_blocked(p, date) && !ledger.contains(day, p))
    })
}

/// First day in `trial_order` that starts an acceptable two-day trip.
pub fn find_consecutive(
    ledger: &OccupancyLedger,
    registry: &PersonRegistry,
    pair: Pair,
    trial_order: &[usize],
) -> Option<(usize, usize)> {
    trial_order.iter().find_map(|&first| {
        let second = ledger.next_consecutive(first)?;
        span_accepts(ledger, registry, pair, &[first, second]).then_some((first, second))
    })
}

/// First day in `trial_order` acceptable for a one-day trip.
pub fn find_single(
    ledger: &OccupancyLedger,
    registry: &PersonRegistry,
    pair: Pair,
    trial_order: &[usize],
) -> Option<usize> {
    trial_order
        .iter()
        .copied()
        .find(|&day| span_accepts(ledger, registry, pair, &[day]))
}

/// Earliest empty day outside `person`'s blackout dates, scanning in date order.
pub fn find_solo_day(
    ledger: &OccupancyLedger,
    registry: &PersonRegistry,
    person: PersonIdx,
) -> Option<usize> {
    ledger
        .iter()
        .position(|(date, occupants)| occupants.is_empty() && !registry.is_blocked(person, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;
    use crate::quarter::QuarterWindow;
    use crate::registry::PersonSpec;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    /// Thu 6, Fri 7, Mon 10, Tue 11 March 2025.
    fn setup(specs: Vec<PersonSpec>) -> (OccupancyLedger, PersonRegistry) {
        let window = QuarterWindow::new(2025, 1, &HolidayCalendar::new("plain")).unwrap();
        let ledger = OccupancyLedger::new(&[date(6), date(7), date(10), date(11)], 2);
        (ledger, PersonRegistry::from_specs(specs, &window).unwrap())
    }

    const AB: Pair = Pair { first: 0, second: 1 };

    #[test]
    fn consecutive_skips_weekend_gap() {
        let (ledger, reg) = setup(vec![PersonSpec::new("A", 2), PersonSpec::new("B", 2)]);
        // Friday cannot start a two-day trip, Monday can
        assert_eq!(find_consecutive(&ledger, &reg, AB, &[1, 2]), Some((2, 3)));
        assert_eq!(find_consecutive(&ledger, &reg, AB, &[1, 3]), None);
    }

    #[test]
    fn consecutive_respects_blackout_on_second_day() {
        let (ledger, reg) = setup(vec![
            PersonSpec::new("A", 2),
            PersonSpec::new("B", 2).with_blackout(date(7)),
        ]);
        assert_eq!(find_consecutive(&ledger, &reg, AB, &[0, 2]), Some((2, 3)));
    }

    #[test]
    fn occupied_day_rejected() {
        let (mut ledger, reg) = setup(vec![
            PersonSpec::new("A", 2),
            PersonSpec::new("B", 2),
            PersonSpec::new("C", 2),
            PersonSpec::new("D", 2),
        ]);
        ledger.assign(3, &[2, 3]).unwrap();
        assert_eq!(find_consecutive(&ledger, &reg, AB, &[2]), None);
        assert_eq!(find_single(&ledger, &reg, AB, &[3, 2]), Some(2));
    }

    #[test]
    fn solo_day_is_reserved() {
        let (mut ledger, reg) = setup(vec![PersonSpec::new("A", 1), PersonSpec::new("B", 1)]);
        ledger.assign(0, &[0]).unwrap();
        assert!(!span_accepts(&ledger, &reg, AB, &[0]));
        assert_eq!(find_single(&ledger, &reg, AB, &[0, 1]), Some(1));
    }

    #[test]
    fn single_respects_either_blackout() {
        let (ledger, reg) = setup(vec![
            PersonSpec::new("A", 1).with_blackout(date(6)),
            PersonSpec::new("B", 1).with_blackout(date(7)),
        ]);
        assert_eq!(find_single(&ledger, &reg, AB, &[0, 1, 2]), Some(2));
    }

    #[test]
    fn solo_scan_in_date_order() {
        let (mut ledger, reg) = setup(vec![PersonSpec::new("A", 1).with_blackout(date(7))]);
        ledger.assign(0, &[5]).unwrap();
        assert_eq!(find_solo_day(&ledger, &reg, 0), Some(2));
    }

    #[test]
    fn out_of_range_span_rejected() {
        let (ledger, reg) = setup(vec![PersonSpec::new("A", 1), PersonSpec::new("B", 1)]);
        assert!(!span_accepts(&ledger, &reg, AB, &[9]));
    }
}
