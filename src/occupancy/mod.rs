use crate::registry::PersonIdx;
use chrono::NaiveDate;
pub mod errors;
use errors::*;


/// Default number of people a single day can hold.
pub const DEFAULT_DAY_CAPACITY: usize = 2;

/// Per-day record of the people already committed to a trip on that day.
///
/// The ledger is addressed by day index into the schedulable-day list it was
/// built from; dates are only used to translate in and out of that index.
///
/// # Internal Structure
/// - `days`: the schedulable days, strictly increasing
/// - `slots`: one occupant list per day, in assignment order
///
/// # Complexity
/// - `assign`: O(k) where k is the day's occupancy (at most the capacity)
/// - `index_of`: O(log n) binary search over the days
/// - `next_consecutive`: O(1)
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tripsync::occupancy::OccupancyLedger;
///
/// let mon = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let tue = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
/// let mut ledger = OccupancyLedger::new(&[mon, tue], 2);
///
/// ledger.assign(0, &[0, 1]).unwrap();
/// assert_eq!(ledger.count(0), 2);
/// assert!(!ledger.can_host_pair(0));
/// assert!(ledger.can_host_pair(1));
/// assert_eq!(ledger.next_consecutive(0), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct OccupancyLedger {
    days: Vec<NaiveDate>,
    slots: Vec<Vec<PersonIdx>>,
    capacity: usize,
}

impl OccupancyLedger {
    /// Creates an empty ledger over `days`, each able to hold `capacity` people.
    pub fn new(days: &[NaiveDate], capacity: usize) -> Self {
        Self {
            days: days.to_vec(),
            slots: vec![Vec::new(); days.len()],
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The date at `day`, if in range.
    pub fn day(&self, day: usize) -> Option<NaiveDate> {
        self.days.get(day).copied()
    }

    /// All ledger days, ascending.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Index of `date`, if it is one of the ledger days.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.days.binary_search(&date).ok()
    }

    /// Index of the calendar day right after `day`, if that day is in the ledger.
    ///
    /// Since days are strictly increasing, the following calendar day can
    /// only sit at `day + 1`.
    pub fn next_consecutive(&self, day: usize) -> Option<usize> {
        let date = self.day(day)?;
        let next = self.day(day + 1)?;
        (date.succ_opt() == Some(next)).then_some(day + 1)
    }

    /// People on `day`, in assignment order.
    pub fn occupants(&self, day: usize) -> &[PersonIdx] {
        self.slots.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, day: usize) -> usize {
        self.occupants(day).len()
    }

    pub fn is_free(&self, day: usize) -> bool {
        self.count(day) == 0
    }

    pub fn contains(&self, day: usize, person: PersonIdx) -> bool {
        self.occupants(day).contains(&person)
    }

    /// Returns true if a pair may join `day`.
    ///
    /// A day holding an odd number of people carries the parity solo trip and
    /// is never joined; otherwise the pair must fit in the remaining capacity.
    pub fn can_host_pair(&self, day: usize) -> bool {
        let count = self.count(day);
        day < self.len() && count % 2 == 0 && count + 2 <= self.capacity
    }

    /// Commits `people` to `day`.
    ///
    /// Requires:
    /// - `day` in range
    /// - no person already present on the day, and no duplicates in `people`
    /// - the day's occupancy stays within capacity
    ///
    /// Nothing is written when any check fails.
    pub fn assign(&mut self, day: usize, people: &[PersonIdx]) -> Result<(), LedgerError> {
        let slot = self.slots.get(day).ok_or(LedgerError::DayOutOfRange(day))?;
        if slot.len() + people.len() > self.capacity {
            return Err(LedgerError::CapacityExceeded {
                day,
                capacity: self.capacity,
            });
        }
        for (i, person) in people.iter().enumerate() {
            if slot.contains(person) || people[..i].contains(person) {
                return Err(LedgerError::AlreadyPresent {
                    day,
                    person: *person,
                });
            }
        }
        self.slots[day].extend_from_slice(people);
        Ok(())
    }

    /// Iterates over `(date, occupants)` in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[PersonIdx])> + '_ {
        self.days
            .iter()
            .zip(self.slots.iter())
            .map(|(d, s)| (*d, s.as_slice()))
    }

    /// Total person-days committed.
    pub fn total_assigned(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}
