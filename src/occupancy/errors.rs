use std::fmt;

use crate::registry::PersonIdx;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Day index is not part of the ledger
    DayOutOfRange(usize),
    /// Assignment would put more people on the day than it can hold
    CapacityExceeded { day: usize, capacity: usize },
    /// Person is already committed on the day
    AlreadyPresent { day: usize, person: PersonIdx },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::DayOutOfRange(day) => {
                write!(f, "Day index {} is not in the ledger", day)
            }
            LedgerError::CapacityExceeded { day, capacity } => {
                write!(f, "Day index {} would exceed its capacity of {}", day, capacity)
            }
            LedgerError::AlreadyPresent { day, person } => {
                write!(f, "Person {} is already assigned on day index {}", person, day)
            }
        }
    }
}

impl std::error::Error for LedgerError {}
