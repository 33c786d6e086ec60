use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tripsync::calendar::{is_year_supported, ChinaCalendar};
use tripsync::config::PlanRequest;
use tripsync::planner::{Planner, PlannerConfig};
use tripsync::report;

#[derive(Parser)]
#[command(name = "tripsync")]
#[command(version)]
#[command(about = "Plans paired business trips across a calendar quarter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocates trips for the people in a request file
    Plan {
        /// JSON request with year, quarter and people
        request: PathBuf,

        /// Seed for a reproducible schedule
        #[arg(short, long)]
        seed: Option<u64>,

        /// Failed iterations tolerated before giving up
        #[arg(long)]
        max_failures: Option<u32>,

        /// Keep the first and last working day of the quarter
        #[arg(long)]
        no_trim: bool,

        /// CSV output path (defaults to travel_schedule_<year>_Q<q>.csv)
        #[arg(long, conflicts_with = "no_csv")]
        csv: Option<PathBuf>,

        /// Skip the CSV export
        #[arg(long)]
        no_csv: bool,
    },

    /// Lists the days trips can be placed on
    Days {
        year: i32,
        quarter: u32,

        #[arg(long)]
        no_trim: bool,
    },

    /// Reports whether holiday data exists for a year
    CheckYear { year: i32 },
}

fn plan(
    request: PathBuf,
    seed: Option<u64>,
    max_failures: Option<u32>,
    no_trim: bool,
    csv: Option<PathBuf>,
    no_csv: bool,
) -> Result<()> {
    let text = fs::read_to_string(&request)
        .with_context(|| format!("Cannot read request '{}'", request.display()))?;
    let request: PlanRequest = serde_json::from_str(&text)
        .with_context(|| format!("Request '{}' is not valid JSON", request.display()))?;

    let mut config = PlannerConfig {
        trim_quarter_edges: !no_trim,
        ..PlannerConfig::default()
    };
    config.allocator.seed = seed;
    if let Some(max) = max_failures {
        config.allocator.max_failures = max;
    }

    let planner = Planner::with_config(ChinaCalendar::new(), config);
    let plan = planner.plan_request(&request)?;

    print!("{}", report::render_events(plan.events()));
    println!();
    print!("{}", report::render_fulfillment(plan.people()));

    if !no_csv {
        let path = csv.unwrap_or_else(|| {
            PathBuf::from(report::default_file_name(request.year, request.quarter))
        });
        report::export_events(&path, plan.events())
            .with_context(|| format!("Cannot write '{}'", path.display()))?;
        info!(path = %path.display(), run_id = plan.run_id(), "schedule exported");
    }
    Ok(())
}

fn days(year: i32, quarter: u32, no_trim: bool) -> Result<()> {
    let calendar = ChinaCalendar::new();
    let planner = Planner::new(calendar);
    let window = planner.window(year, quarter)?;
    let days = window.days(!no_trim);
    println!("{} schedulable days in {} Q{}", days.len(), year, quarter);
    for day in days {
        println!("  {}", report::format_day_label(*day));
    }
    Ok(())
}

fn check_year(year: i32) -> Result<()> {
    let calendar = ChinaCalendar::new();
    if is_year_supported(&calendar, year) {
        println!("{}: holiday data available", year);
    } else {
        let (first, last) = ChinaCalendar::data_years();
        println!("{}: no holiday data (covered years {}-{})", year, first, last);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripsync=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse().command {
        Commands::Plan {
            request,
            seed,
            max_failures,
            no_trim,
            csv,
            no_csv,
        } => plan(request, seed, max_failures, no_trim, csv, no_csv),
        Commands::Days {
            year,
            quarter,
            no_trim,
        } => days(year, quarter, no_trim),
        Commands::CheckYear { year } => check_year(year),
    }
}
