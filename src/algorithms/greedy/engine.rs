//! Run state and the pair-matching loop.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::algorithms::{Allocation, AllocationError, Termination};
use crate::calendar::CalendarProvider;
use crate::occupancy::errors::LedgerError;
use crate::occupancy::OccupancyLedger;
use crate::registry::{PersonIdx, PersonRegistry};
use crate::trip::{TripEvent, TripEventFactory};

use super::candidate::{find_consecutive, find_single};
use super::config::AllocatorConfig;
use super::ordering::{select_pair, Selection};

/// Working set of one allocation run. Owned exclusively by the run.
pub struct Run<'a, C: CalendarProvider + ?Sized> {
    pub(super) registry: PersonRegistry,
    pub(super) ledger: OccupancyLedger,
    pub(super) order: Vec<PersonIdx>,
    factory: TripEventFactory<'a, C>,
    events: Vec<TripEvent>,
}

impl<'a, C: CalendarProvider + ?Sized> Run<'a, C> {
    pub fn new(
        registry: PersonRegistry,
        days: &[NaiveDate],
        calendar: &'a C,
        day_capacity: usize,
    ) -> Self {
        let order = registry.indices().collect();
        Self {
            registry,
            ledger: OccupancyLedger::new(days, day_capacity),
            order,
            factory: TripEventFactory::new(calendar),
            events: Vec::new(),
        }
    }

    /// Commits a trip over day indices `[first, last]` for `people`.
    ///
    /// The event is built before any state changes, so a calendar fault
    /// leaves the ledger and counts untouched.
    pub fn commit(
        &mut self,
        first: usize,
        last: usize,
        people: &[PersonIdx],
    ) -> Result<(), AllocationError> {
        let span: Vec<usize> = (first..=last).collect();
        let (Some(start), Some(end)) = (self.ledger.day(first), self.ledger.day(last)) else {
            return Err(LedgerError::DayOutOfRange(last).into());
        };
        let names = people
            .iter()
            .map(|&p| self.registry.name(p).to_string())
            .collect();
        let event = self.factory.build(start, end, names)?;

        for &day in &span {
            self.ledger.assign(day, people)?;
        }
        for &p in people {
            self.registry.credit(p, span.len() as u32);
        }
        debug!(
            start = %event.start_date(),
            end = %event.end_date(),
            participants = ?event.participants(),
            "committed trip"
        );
        self.events.push(event);
        Ok(())
    }

    pub fn finish(mut self, termination: Termination, failed_iterations: u32) -> Allocation {
        // Stable: same-day events keep commit order
        self.events.sort_by_key(TripEvent::start_date);
        Allocation {
            events: self.events,
            people: self.registry.fulfillments(),
            termination,
            failed_iterations,
        }
    }
}

/// Repeatedly pairs the two neediest people until everyone is served, a single
/// person is left, or `max_failures` iterations placed nothing.
///
/// Each iteration shuffles the trial order of days afresh; a failed iteration
/// also shuffles the working order of people, which only changes how equal
/// remaining counts are ranked next time.
pub fn match_pairs<C, R>(
    run: &mut Run<'_, C>,
    config: &AllocatorConfig,
    rng: &mut R,
) -> Result<(Termination, u32), AllocationError>
where
    C: CalendarProvider + ?Sized,
    R: Rng + ?Sized,
{
    let mut failures = 0u32;
    let mut trial_order: Vec<usize> = (0..run.ledger.len()).collect();

    loop {
        let pair = match select_pair(&run.registry, &run.order) {
            Selection::Satisfied => return Ok((Termination::Fulfilled, failures)),
            Selection::Lone(p) => {
                let name = run.registry.name(p).to_string();
                debug!(person = %name, remaining = run.registry.remaining(p), "no partner left");
                return Ok((Termination::Unpaired(name), failures));
            }
            Selection::Pair(pair) => pair,
        };
        if failures >= config.max_failures {
            warn!(max_failures = config.max_failures, "failure ceiling reached");
            return Ok((Termination::FailureCeiling, failures));
        }

        trial_order.shuffle(rng);

        if pair.wants_consecutive(&run.registry) {
            if let Some((first, second)) =
                find_consecutive(&run.ledger, &run.registry, pair, &trial_order)
            {
                run.commit(first, second, &pair.members())?;
                continue;
            }
        }

        if let Some(day) = find_single(&run.ledger, &run.registry, pair, &trial_order) {
            run.commit(day, day, &pair.members())?;
            continue;
        }

        failures += 1;
        trace!(
            first = run.registry.name(pair.first),
            second = run.registry.name(pair.second),
            failures,
            "no day fits pair"
        );
        run.order.shuffle(rng);
    }
}
