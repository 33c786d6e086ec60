//! Participant input and outcome types.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::error::PersonError;
use crate::quarter::QuarterWindow;
use crate::Id;

/// Caller-supplied description of one participant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonSpec {
    /// Unique name within a run.
    pub name: Id,
    /// Trip days requested across the quarter.
    pub target_count: u32,
    /// Dates on which this person cannot travel.
    #[cfg_attr(feature = "serde", serde(default))]
    pub blackout_dates: BTreeSet<NaiveDate>,
}

impl PersonSpec {
    pub fn new(name: impl Into<Id>, target_count: u32) -> Self {
        Self {
            name: name.into(),
            target_count,
            blackout_dates: BTreeSet::new(),
        }
    }

    /// Adds a single blackout date.
    pub fn with_blackout(mut self, date: NaiveDate) -> Self {
        self.blackout_dates.insert(date);
        self
    }

    /// Adds several blackout dates.
    pub fn with_blackouts(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.blackout_dates.extend(dates);
        self
    }

    /// Checks the entity-level rules against the quarter being planned.
    pub fn validate(&self, window: &QuarterWindow) -> Result<(), PersonError> {
        if self.name.trim().is_empty() {
            return Err(PersonError::EmptyName);
        }
        if self.target_count == 0 {
            return Err(PersonError::NonPositiveTarget(self.name.clone()));
        }
        if let Some(date) = self.blackout_dates.iter().find(|d| !window.contains(**d)) {
            return Err(PersonError::BlackoutOutsideQuarter {
                name: self.name.clone(),
                date: *date,
            });
        }
        Ok(())
    }
}

/// Final per-person result of a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fulfillment {
    pub name: Id,
    pub target_count: u32,
    pub current_count: u32,
}

impl Fulfillment {
    /// Trip days still missing.
    pub fn shortfall(&self) -> u32 {
        self.target_count.saturating_sub(self.current_count)
    }

    pub fn is_complete(&self) -> bool {
        self.shortfall() == 0
    }
}
