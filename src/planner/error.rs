use thiserror::Error;

use crate::algorithms::AllocationError;
use crate::calendar::CalendarError;
use crate::quarter::QuarterError;
use crate::registry::PersonError;

/// Everything that can stop a scheduling run before it yields a plan.
///
/// Unmet targets are not errors; they show up in [`Plan`](super::Plan) as
/// shortfalls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Quarter(#[from] QuarterError),

    #[error("Invalid participant: {0}")]
    Person(#[from] PersonError),

    #[error("Allocation failed: {0}")]
    Allocation(#[from] AllocationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_person_error() {
        let e: PlanError = PersonError::EmptyName.into();
        assert_eq!(e.to_string(), "Invalid participant: Person name cannot be empty");
    }

    #[test]
    fn calendar_error_is_transparent() {
        let inner = CalendarError::YearUnsupported {
            calendar: "CN".to_string(),
            year: 2030,
        };
        let e = PlanError::from(inner.clone());
        assert_eq!(e.to_string(), inner.to_string());
    }
}
