//! One scheduling run, end to end.
//!
//! [`Planner`] ties the pieces together in a fixed order:
//!
//! 1. Refuse years the calendar has no holiday data for (optional)
//! 2. Build the [`QuarterWindow`] and pick its schedulable days
//! 3. Validate participants into a fresh [`PersonRegistry`]
//! 4. Run the allocator and wrap its result in a [`Plan`]
//!
//! Each run gets its own id, carried on the `plan` tracing span so the log
//! lines of concurrent runs can be told apart. A planner holds no state
//! between runs.

mod error;

pub use error::PlanError;

use chrono::NaiveDate;
use rand::Rng;
use tracing::{info, info_span, warn};

use crate::algorithms::{
    Allocation, AllocationAlgorithm, AllocatorConfig, GreedyPairAllocator, Termination,
};
use crate::calendar::{check_year_support, CalendarProvider};
use crate::config::PlanRequest;
use crate::quarter::QuarterWindow;
use crate::registry::{Fulfillment, PersonRegistry, PersonSpec};
use crate::trip::TripEvent;
use crate::{generate_id, Id};

/// Run-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Drop the first and last working day of the quarter.
    pub trim_quarter_edges: bool,
    /// Refuse years without holiday data in the calendar.
    pub require_calendar_data: bool,
    pub allocator: AllocatorConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            trim_quarter_edges: true,
            require_calendar_data: true,
            allocator: AllocatorConfig::default(),
        }
    }
}

/// Outcome of one run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Plan {
    run_id: Id,
    window: QuarterWindow,
    trimmed: bool,
    allocation: Allocation,
}

impl Plan {
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn window(&self) -> &QuarterWindow {
        &self.window
    }

    /// Days the allocator was allowed to use.
    pub fn days(&self) -> &[NaiveDate] {
        self.window.days(self.trimmed)
    }

    pub fn events(&self) -> &[TripEvent] {
        &self.allocation.events
    }

    pub fn people(&self) -> &[Fulfillment] {
        &self.allocation.people
    }

    pub fn termination(&self) -> &Termination {
        &self.allocation.termination
    }

    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    pub fn is_complete(&self) -> bool {
        self.allocation.is_complete()
    }

    pub fn into_allocation(self) -> Allocation {
        self.allocation
    }
}

/// Runs the greedy allocator over one quarter of a calendar.
///
/// # Example
///
/// ```
/// use tripsync::calendar::ChinaCalendar;
/// use tripsync::planner::Planner;
/// use tripsync::registry::PersonSpec;
///
/// let planner = Planner::new(ChinaCalendar::new());
/// let plan = planner
///     .plan(2025, 4, vec![PersonSpec::new("Ana", 2), PersonSpec::new("Bo", 2)])
///     .unwrap();
/// assert!(plan.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct Planner<C> {
    calendar: C,
    config: PlannerConfig,
}

impl<C: CalendarProvider> Planner<C> {
    pub fn new(calendar: C) -> Self {
        Self::with_config(calendar, PlannerConfig::default())
    }

    pub fn with_config(calendar: C, config: PlannerConfig) -> Self {
        Self { calendar, config }
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Builds the quarter window after the calendar data guard.
    ///
    /// Without edge trimming the first trip of Q1 and the last trip of Q4
    /// take their paperwork dates from the neighbouring year, so that year
    /// must carry data too.
    pub fn window(&self, year: i32, quarter: u32) -> Result<QuarterWindow, PlanError> {
        if self.config.require_calendar_data {
            check_year_support(&self.calendar, year)?;
            if !self.config.trim_quarter_edges {
                let neighbour = match quarter {
                    1 => year.checked_sub(1),
                    4 => year.checked_add(1),
                    _ => None,
                };
                if let Some(neighbour) = neighbour {
                    check_year_support(&self.calendar, neighbour)?;
                }
            }
        }
        Ok(QuarterWindow::new(year, quarter, &self.calendar)?)
    }

    /// Plans a quarter with the random source from the allocator config.
    pub fn plan(
        &self,
        year: i32,
        quarter: u32,
        people: Vec<PersonSpec>,
    ) -> Result<Plan, PlanError> {
        let mut rng = self.config.allocator.rng();
        self.plan_with_rng(year, quarter, people, &mut rng)
    }

    /// Plans a quarter drawing randomness from `rng`.
    pub fn plan_with_rng<R>(
        &self,
        year: i32,
        quarter: u32,
        people: Vec<PersonSpec>,
        rng: &mut R,
    ) -> Result<Plan, PlanError>
    where
        R: Rng + ?Sized,
    {
        let run_id = generate_id();
        let span = info_span!("plan", run_id = %run_id, year, quarter);
        let _guard = span.enter();

        let window = self.window(year, quarter)?;
        let registry = PersonRegistry::from_specs(people, &window)?;
        let trimmed = self.config.trim_quarter_edges;
        let days = window.days(trimmed);

        let allocator = GreedyPairAllocator::new(self.config.allocator.clone());
        let allocation = allocator.allocate(registry, days, &self.calendar, rng)?;

        info!(
            events = allocation.events.len(),
            assigned_days = allocation.assigned_days(),
            schedulable_days = days.len(),
            failed_iterations = allocation.failed_iterations,
            termination = ?allocation.termination,
            "plan finished"
        );
        for short in allocation.shortfalls() {
            warn!(
                person = %short.name,
                target = short.target_count,
                actual = short.current_count,
                "target not met"
            );
        }

        Ok(Plan {
            run_id,
            window,
            trimmed,
            allocation,
        })
    }

    /// Plans the quarter described by a request file.
    pub fn plan_request(&self, request: &PlanRequest) -> Result<Plan, PlanError> {
        let people = request.person_specs()?;
        self.plan(request.year, request.quarter, people)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{CalendarError, ChinaCalendar, HolidayCalendar};
    use crate::config::PersonEntry;
    use crate::quarter::QuarterError;
    use crate::registry::PersonError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded(seed: u64) -> PlannerConfig {
        PlannerConfig {
            allocator: AllocatorConfig::default().with_seed(seed),
            ..PlannerConfig::default()
        }
    }

    #[test]
    fn unsupported_year_is_refused() {
        let planner = Planner::new(ChinaCalendar::new());
        let err = planner
            .plan(2031, 1, vec![PersonSpec::new("A", 1)])
            .unwrap_err();
        assert_eq!(
            err,
            PlanError::Calendar(CalendarError::YearUnsupported {
                calendar: "CN".to_string(),
                year: 2031
            })
        );
    }

    #[test]
    fn guard_can_be_disabled() {
        let config = PlannerConfig {
            require_calendar_data: false,
            ..seeded(1)
        };
        let planner = Planner::with_config(HolidayCalendar::new("plain"), config);
        let plan = planner
            .plan(2031, 1, vec![PersonSpec::new("A", 2), PersonSpec::new("B", 2)])
            .unwrap();
        assert!(plan.is_complete());
        assert_eq!(plan.events().len(), 1);
    }

    #[test]
    fn invalid_quarter_is_refused() {
        let planner = Planner::new(ChinaCalendar::new());
        let err = planner.plan(2025, 5, vec![]).unwrap_err();
        assert_eq!(err, PlanError::Quarter(QuarterError::InvalidQuarter(5)));
    }

    #[test]
    fn invalid_people_are_refused() {
        let planner = Planner::new(ChinaCalendar::new());
        let err = planner
            .plan(
                2025,
                4,
                vec![PersonSpec::new("A", 1).with_blackout(date(2025, 9, 30))],
            )
            .unwrap_err();
        assert_eq!(
            err,
            PlanError::Person(PersonError::BlackoutOutsideQuarter {
                name: "A".to_string(),
                date: date(2025, 9, 30)
            })
        );
    }

    #[test]
    fn edges_are_trimmed_by_default() {
        let planner = Planner::with_config(ChinaCalendar::new(), seeded(5));
        let plan = planner.plan(2025, 4, vec![PersonSpec::new("A", 1)]).unwrap();
        assert_eq!(plan.days().first(), Some(&date(2025, 10, 10)));
        assert_eq!(plan.days().last(), Some(&date(2025, 12, 30)));
        assert_eq!(plan.events()[0].start_date(), date(2025, 10, 10));
    }

    #[test]
    fn untrimmed_uses_every_working_day() {
        let config = PlannerConfig {
            trim_quarter_edges: false,
            ..seeded(5)
        };
        let planner = Planner::with_config(ChinaCalendar::new(), config);
        let plan = planner.plan(2025, 4, vec![PersonSpec::new("A", 1)]).unwrap();
        assert_eq!(plan.days().len(), 61);
        assert_eq!(plan.events()[0].start_date(), date(2025, 10, 9));
    }

    #[test]
    fn year_end_trip_reimbursed_after_new_year_break() {
        let config = PlannerConfig {
            trim_quarter_edges: false,
            ..seeded(8)
        };
        let planner = Planner::with_config(ChinaCalendar::new(), config);
        let window = planner.window(2025, 4).unwrap();
        let last = date(2025, 12, 31);
        let busy: Vec<NaiveDate> = window
            .working_days()
            .iter()
            .copied()
            .filter(|d| *d != last)
            .collect();
        let people = vec![
            PersonSpec::new("A", 1).with_blackouts(busy.clone()),
            PersonSpec::new("B", 1).with_blackouts(busy),
        ];

        let plan = planner.plan(2025, 4, people).unwrap();
        assert_eq!(plan.events().len(), 1);
        let trip = &plan.events()[0];
        assert_eq!(trip.start_date(), last);
        assert_eq!(trip.approval_date(), date(2025, 12, 30));
        assert_eq!(trip.reimburse_date(), date(2026, 1, 4));
    }

    #[test]
    fn untrimmed_edge_needs_neighbouring_year() {
        let config = PlannerConfig {
            trim_quarter_edges: false,
            ..seeded(1)
        };
        let planner = Planner::with_config(ChinaCalendar::new(), config);
        assert_eq!(
            planner.window(2026, 4).unwrap_err(),
            PlanError::Calendar(CalendarError::YearUnsupported {
                calendar: "CN".to_string(),
                year: 2027
            })
        );
        assert!(planner.window(2026, 3).is_ok());

        // Trimmed edges stay inside the year
        let trimmed = Planner::with_config(ChinaCalendar::new(), seeded(1));
        assert!(trimmed.window(2026, 4).is_ok());
    }

    #[test]
    fn current_year_is_planned() {
        let planner = Planner::with_config(ChinaCalendar::new(), seeded(4));
        let plan = planner
            .plan(2026, 1, vec![PersonSpec::new("A", 3), PersonSpec::new("B", 3)])
            .unwrap();
        assert!(plan.is_complete());
        // 2026-01-04 (Sunday) is the first working day and is trimmed
        assert_eq!(plan.days().first(), Some(&date(2026, 1, 5)));
        let allocation = plan.into_allocation();
        assert_eq!(allocation.assigned_days(), 6);
    }

    #[test]
    fn seeded_plans_repeat() {
        let planner = Planner::with_config(ChinaCalendar::new(), seeded(11));
        let people = || {
            vec![
                PersonSpec::new("A", 6),
                PersonSpec::new("B", 5),
                PersonSpec::new("C", 4),
            ]
        };
        let first = planner.plan(2025, 4, people()).unwrap();
        let second = planner.plan(2025, 4, people()).unwrap();
        assert_eq!(first.events(), second.events());
        assert_ne!(first.run_id(), second.run_id());
    }

    #[test]
    fn explicit_rng_overrides_config() {
        let planner = Planner::new(ChinaCalendar::new());
        let mut rng = StdRng::seed_from_u64(3);
        let plan = planner
            .plan_with_rng(
                2024,
                2,
                vec![PersonSpec::new("A", 4), PersonSpec::new("B", 4)],
                &mut rng,
            )
            .unwrap();
        assert!(plan.is_complete());
        assert_eq!(plan.window().quarter(), 2);
        assert_eq!(*plan.termination(), Termination::Fulfilled);
    }

    #[test]
    fn request_blackouts_resolve_against_year() {
        let request = PlanRequest {
            year: 2025,
            quarter: 4,
            people: vec![
                PersonEntry::new("A", 1).with_blackout("10-10"),
                PersonEntry::new("B", 2),
            ],
        };
        let planner = Planner::with_config(ChinaCalendar::new(), seeded(2));
        let plan = planner.plan_request(&request).unwrap();
        // B has the largest target and takes the first day alone
        assert_eq!(plan.events()[0].participants(), &["B".to_string()]);
        assert_eq!(plan.events()[0].start_date(), date(2025, 10, 10));
        assert!(plan
            .events()
            .iter()
            .filter(|e| e.includes("A"))
            .all(|e| e.start_date() != date(2025, 10, 10)));
        assert!(plan.is_complete());
    }

    #[test]
    fn malformed_request_blackout_is_refused() {
        let request = PlanRequest {
            year: 2025,
            quarter: 4,
            people: vec![PersonEntry::new("A", 1).with_blackout("Nov 7")],
        };
        let err = Planner::new(ChinaCalendar::new())
            .plan_request(&request)
            .unwrap_err();
        assert_eq!(
            err,
            PlanError::Person(PersonError::InvalidBlackout("Nov 7".to_string()))
        );
    }
}
