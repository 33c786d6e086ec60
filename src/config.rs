//! Run requests as read from disk.
//!
//! A request names the quarter and the people to plan for. Blackout dates are
//! kept as the strings the user wrote (`MM-DD` or `YYYY-MM-DD`) and only
//! resolved against the request year when the request is turned into
//! [`PersonSpec`]s.
//!
//! ```json
//! {
//!   "year": 2025,
//!   "quarter": 4,
//!   "people": [
//!     { "name": "Li", "target": 18, "blackout": ["10-10", "11-06"] },
//!     { "name": "Cong", "target": 20 }
//!   ]
//! }
//! ```

use crate::registry::{parse_blackouts, PersonError, PersonSpec};

/// One planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    pub year: i32,
    pub quarter: u32,
    pub people: Vec<PersonEntry>,
}

/// A participant as written in a request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonEntry {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(alias = "count"))]
    pub target: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blackout: Vec<String>,
}

impl PersonEntry {
    pub fn new(name: impl Into<String>, target: u32) -> Self {
        Self {
            name: name.into(),
            target,
            blackout: Vec::new(),
        }
    }

    pub fn with_blackout(mut self, raw: impl Into<String>) -> Self {
        self.blackout.push(raw.into());
        self
    }

    /// Resolves the blackout strings against `year`.
    pub fn to_spec(&self, year: i32) -> Result<PersonSpec, PersonError> {
        let dates = parse_blackouts(year, self.blackout.iter().map(String::as_str))?;
        Ok(PersonSpec::new(self.name.clone(), self.target).with_blackouts(dates))
    }
}

impl PlanRequest {
    pub fn new(year: i32, quarter: u32) -> Self {
        Self {
            year,
            quarter,
            people: Vec::new(),
        }
    }

    pub fn with_person(mut self, person: PersonEntry) -> Self {
        self.people.push(person);
        self
    }

    /// Participants in request order, blackouts resolved.
    pub fn person_specs(&self) -> Result<Vec<PersonSpec>, PersonError> {
        self.people.iter().map(|p| p.to_spec(self.year)).collect()
    }
}
