//! Randomized greedy pair allocation.
//!
//! People travel in pairs; the allocator repeatedly takes the two people with
//! the most remaining trip days and looks for a day (or two consecutive days)
//! that both can take. The algorithm follows these key principles:
//!
//! 1. **Parity balancing**: when the sum of all targets is odd, the person
//!    with the largest target first gets one solo day (the earliest empty day
//!    outside their blackout dates), so the rest can be paired off.
//!
//! 2. **Pair selection**: the needy people are stably sorted by remaining
//!    days; the top two form the pair. A single remaining person ends the run,
//!    since a lone requirement cannot be paired.
//!
//! 3. **Placement**:
//!    - If both need at least two more days, try a two-day trip on
//!      consecutive schedulable days first
//!    - Otherwise, or if no two-day slot fits, try a single day
//!    - Days are tried in a fresh random order every iteration
//!
//! 4. **Bounded retry**: an iteration that places nothing counts as a
//!    failure and reshuffles the people (which only matters for ties). The
//!    run ends once `max_failures` is reached.
//!
//! # Guarantees
//!
//! Every committed trip respects blackout dates and day capacity, and nobody
//! is ever credited beyond their target. The allocator does **not** guarantee
//! that all targets are met, nor that it finds a full assignment when one
//! exists: there is no backtracking, only random retries.
//!
//! # Module Structure
//!
//! - [`config`] - Allocator configuration
//! - [`ordering`] - Pair selection and tie handling
//! - [`candidate`] - Day search against ledger and blackouts
//! - [`parity`] - Odd-total solo trip
//! - [`engine`] - Run state and the matching loop

mod candidate;
mod config;
mod engine;
mod ordering;
mod parity;


pub use config::AllocatorConfig;

use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

use crate::algorithms::{Allocation, AllocationAlgorithm, AllocationError};
use crate::calendar::CalendarProvider;
use crate::registry::PersonRegistry;

use engine::{match_pairs, Run};
use parity::balance_parity;

/// Randomized greedy pair allocator.
#[derive(Debug, Clone, Default)]
pub struct GreedyPairAllocator {
    config: AllocatorConfig,
}

impl GreedyPairAllocator {
    pub fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Allocates with the random source described by the configuration.
    pub fn allocate_seeded<C>(
        &self,
        registry: PersonRegistry,
        days: &[NaiveDate],
        calendar: &C,
    ) -> Result<Allocation, AllocationError>
    where
        C: CalendarProvider + ?Sized,
    {
        let mut rng = self.config.rng();
        self.allocate(registry, days, calendar, &mut rng)
    }
}

impl AllocationAlgorithm for GreedyPairAllocator {
    fn allocate<C, R>(
        &self,
        registry: PersonRegistry,
        days: &[NaiveDate],
        calendar: &C,
        rng: &mut R,
    ) -> Result<Allocation, AllocationError>
    where
        C: CalendarProvider + ?Sized,
        R: Rng + ?Sized,
    {
        debug!(
            people = registry.len(),
            days = days.len(),
            total_needed = registry.total_needed(),
            "starting allocation"
        );
        let mut run = Run::new(registry, days, calendar, self.config.day_capacity);
        balance_parity(&mut run)?;
        let (termination, failures) = match_pairs(&mut run, &self.config, rng)?;
        Ok(run.finish(termination, failures))
    }
}
