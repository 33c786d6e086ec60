//! Plans the fourth quarter of 2025 for a small team and prints the result.

use tripsync::calendar::ChinaCalendar;
use tripsync::config::{PersonEntry, PlanRequest};
use tripsync::planner::{Planner, PlannerConfig};
use tripsync::report;
use tripsync::AllocatorConfig;

fn main() {
    let request = PlanRequest::new(2025, 4)
        .with_person(
            PersonEntry::new("Li", 18)
                .with_blackout("10-10")
                .with_blackout("11-06")
                .with_blackout("11-07"),
        )
        .with_person(PersonEntry::new("Jinwu", 15).with_blackout("11-10"))
        .with_person(PersonEntry::new("Yuanfa", 18).with_blackout("12-31"))
        .with_person(PersonEntry::new("Qingchun", 13).with_blackout("10-22"))
        .with_person(PersonEntry::new("Cong", 19));

    let config = PlannerConfig {
        allocator: AllocatorConfig::default().with_seed(2025),
        ..PlannerConfig::default()
    };
    let planner = Planner::with_config(ChinaCalendar::new(), config);

    let window = match planner.window(request.year, request.quarter) {
        Ok(window) => window,
        Err(e) => {
            eprintln!("Cannot plan: {}", e);
            return;
        }
    };
    println!(
        "Q{} {}: {} working days, {} schedulable",
        window.quarter(),
        window.year(),
        window.working_days().len(),
        window.schedulable_days().len()
    );

    match planner.plan_request(&request) {
        Ok(plan) => {
            println!("Run {}", plan.run_id());
            print!("{}", report::render_events(plan.events()));
            print!("{}", report::render_fulfillment(plan.people()));
            println!("Stopped: {:?}", plan.termination());
        }
        Err(e) => eprintln!("Planning failed: {}", e),
    }
}
