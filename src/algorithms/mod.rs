pub mod greedy;

pub use greedy::{AllocatorConfig, GreedyPairAllocator};

use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

use crate::calendar::CalendarProvider;
use crate::occupancy::errors::LedgerError;
use crate::registry::{Fulfillment, PersonRegistry};
use crate::trip::{TripError, TripEvent};
use crate::Id;

/// Algorithm that turns people and schedulable days into trip events.
///
/// Implementations take ownership of the registry for the whole run and hand
/// back a fresh [`Allocation`]; nothing outside the run can observe the
/// intermediate counts.
pub trait AllocationAlgorithm {
    /// Allocates trips for `registry` over `days`.
    ///
    /// # Arguments
    ///
    /// * `registry` - Validated participants, all counts at zero
    /// * `days` - Schedulable working days, strictly increasing
    /// * `calendar` - Provider used for approval and reimbursement dates
    /// * `rng` - Random source for trial orders
    fn allocate<C, R>(
        &self,
        registry: PersonRegistry,
        days: &[NaiveDate],
        calendar: &C,
        rng: &mut R,
    ) -> Result<Allocation, AllocationError>
    where
        C: CalendarProvider + ?Sized,
        R: Rng + ?Sized;
}

/// Why the allocation loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Termination {
    /// Every target was met.
    Fulfilled,
    /// Only one person still needed trips; a lone requirement cannot be paired.
    Unpaired(Id),
    /// The failed-iteration ceiling was reached.
    FailureCeiling,
}

/// Result of one allocation run.
///
/// Unmet targets are part of a successful result: inspect
/// [`shortfalls`](Self::shortfalls) rather than expecting an error.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Allocation {
    /// Committed trips, ascending by start date (commit order on ties).
    pub events: Vec<TripEvent>,
    /// Final counts in input order.
    pub people: Vec<Fulfillment>,
    pub termination: Termination,
    /// Iterations in which no trip could be placed.
    pub failed_iterations: u32,
}

impl Allocation {
    /// People whose target was not met.
    pub fn shortfalls(&self) -> impl Iterator<Item = &Fulfillment> + '_ {
        self.people.iter().filter(|p| !p.is_complete())
    }

    pub fn is_complete(&self) -> bool {
        self.shortfalls().next().is_none()
    }

    /// Total person-days committed across all events.
    pub fn assigned_days(&self) -> u32 {
        self.people.iter().map(|p| p.current_count).sum()
    }
}

/// Faults that abort an allocation run.
///
/// Both variants indicate broken collaborators (a calendar without nearby
/// working days) or an engine bug; ordinary placement failures never surface
/// here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("Occupancy ledger rejected an assignment: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Cannot build trip event: {0}")]
    Trip(#[from] TripError),
}
