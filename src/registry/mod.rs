//! Participants of a scheduling run.
//!
//! Callers describe people with [`PersonSpec`]. A run validates the specs and
//! moves them into a [`PersonRegistry`], an index-addressed arena that the
//! allocation engine owns for the duration of the run. Participants are
//! referred to by [`PersonIdx`] everywhere inside the engine; names only
//! reappear on the produced trip events and in the final [`Fulfillment`] list.

mod blackout;
mod error;
mod person;

pub use blackout::{parse_blackout, parse_blackouts};
pub use error::PersonError;
pub use person::{Fulfillment, PersonSpec};

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;

use crate::quarter::QuarterWindow;
use crate::Id;

/// Index of a participant inside a [`PersonRegistry`].
pub type PersonIdx = usize;

#[derive(Debug, Clone)]
struct Participant {
    name: Id,
    target_count: u32,
    current_count: u32,
    blackout_dates: BTreeSet<NaiveDate>,
}

/// Run-local arena of participants with their running trip-day counts.
///
/// # Invariants
///
/// - Names are unique and non-empty; targets are positive
/// - `current_count <= target_count` for every participant
/// - Iteration order is the caller's input order
#[derive(Debug, Clone, Default)]
pub struct PersonRegistry {
    people: Vec<Participant>,
}

impl PersonRegistry {
    /// Validates `specs` against `window` and builds the arena.
    ///
    /// # Errors
    ///
    /// The first [`PersonError`] found, in input order. Duplicate names are
    /// reported on their second occurrence.
    pub fn from_specs(specs: Vec<PersonSpec>, window: &QuarterWindow) -> Result<Self, PersonError> {
        let mut seen = HashSet::new();
        let mut people = Vec::with_capacity(specs.len());
        for spec in specs {
            spec.validate(window)?;
            if !seen.insert(spec.name.clone()) {
                return Err(PersonError::DuplicateName(spec.name));
            }
            people.push(Participant {
                name: spec.name,
                target_count: spec.target_count,
                current_count: 0,
                blackout_dates: spec.blackout_dates,
            });
        }
        Ok(Self { people })
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Indices of all participants in input order.
    pub fn indices(&self) -> std::ops::Range<PersonIdx> {
        0..self.people.len()
    }

    pub fn name(&self, idx: PersonIdx) -> &str {
        &self.people[idx].name
    }

    pub fn target(&self, idx: PersonIdx) -> u32 {
        self.people[idx].target_count
    }

    pub fn current(&self, idx: PersonIdx) -> u32 {
        self.people[idx].current_count
    }

    /// Trip days this participant still needs.
    pub fn remaining(&self, idx: PersonIdx) -> u32 {
        let p = &self.people[idx];
        p.target_count - p.current_count
    }

    /// Returns true if `date` is one of this participant's blackout dates.
    pub fn is_blocked(&self, idx: PersonIdx, date: NaiveDate) -> bool {
        self.people[idx].blackout_dates.contains(&date)
    }

    /// Sum of all targets.
    pub fn total_needed(&self) -> u64 {
        self.people.iter().map(|p| u64::from(p.target_count)).sum()
    }

    /// Records `days` committed trip days for a participant.
    ///
    /// Callers must never credit past the target.
    pub(crate) fn credit(&mut self, idx: PersonIdx, days: u32) {
        let p = &mut self.people[idx];
        debug_assert!(
            p.current_count + days <= p.target_count,
            "credit would exceed target for {}",
            p.name
        );
        p.current_count = (p.current_count + days).min(p.target_count);
    }

    /// Snapshot of every participant's counts, in input order.
    pub fn fulfillments(&self) -> Vec<Fulfillment> {
        self.people
            .iter()
            .map(|p| Fulfillment {
                name: p.name.clone(),
                target_count: p.target_count,
                current_count: p.current_count,
            })
            .collect()
    }
}
