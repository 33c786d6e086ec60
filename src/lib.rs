//! tripsync - quarterly business-trip allocation
//!
//! Distributes each person's requested trip days across the working days of a
//! calendar quarter. People travel in pairs on one or two consecutive days,
//! never on their blackout dates, and every trip comes with the approval date
//! (last working day before departure) and reimbursement date (first working
//! day after return) the paperwork needs.

pub mod algorithms;
pub mod calendar;
pub mod config;
pub mod occupancy;
pub mod planner;
pub mod quarter;
pub mod registry;
pub mod report;
pub mod trip;

pub use algorithms::{Allocation, AllocatorConfig, Termination};
pub use planner::{Plan, PlanError, Planner, PlannerConfig};

/// Identifier type used for people and planning runs.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
