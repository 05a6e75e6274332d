use std::borrow::Cow;
use std::collections::BTreeMap;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use cranes::algorithms::{DynProgSolver, ExhaustiveSolver};
use cranes::utils::{total_steps, MAX_EXHAUSTIVE_STEPS};
use cranes::{CraneSolver, CranesError, Grid};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(
    name = "cranes_probe",
    about = "Time both crane unloading solvers on growing random grids and cross-check their scores."
)]
struct Options {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest step count (rows + columns - 2) checked against the exhaustive solver.
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(0..=MAX_EXHAUSTIVE_STEPS as u64))]
    verify_limit: u64,

    /// Seed for grid generation.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Percentage of cells holding a crane.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u64).range(0..=100))]
    crane_percent: u64,

    /// Percentage of cells holding a building.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(0..=100))]
    building_percent: u64,
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

/// One timed solver run on one grid.
#[derive(Serialize)]
struct Measurement {
    scenario: &'static str,
    size: String,
    wall_s: f64,
    rss_delta_kib: u64,
    outcome: String,
    verification: Verification,
}

#[derive(Serialize)]
struct Verification {
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

/// A solver timed on square grids, cross-checked against a different solver.
struct Scenario<'a> {
    name: &'static str,
    solver: &'a dyn CraneSolver,
    reference: &'a dyn CraneSolver,
    /// Grids needing more steps than this are not cross-checked.
    reference_limit: Option<u64>,
    sizes: &'static [usize],
}

fn main() {
    let options = Options::parse();
    SubscriberBuilder::default()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    eprintln!(
        "crane unloading probe: {}% cranes, {}% buildings, seed {}",
        options.crane_percent, options.building_percent, options.seed
    );

    let exhaustive = ExhaustiveSolver::new();
    let scenarios = [
        Scenario {
            name: "dyn_prog",
            solver: &DynProgSolver,
            reference: &exhaustive,
            reference_limit: Some(options.verify_limit),
            sizes: &[4, 8, 16, 64, 256, 512, 1024, 2048],
        },
        Scenario {
            name: "exhaustive",
            solver: &exhaustive,
            reference: &DynProgSolver,
            reference_limit: None,
            sizes: &[2, 4, 6, 8, 10],
        },
    ];

    let mut sys = System::new();
    let mut measurements = Vec::new();
    for scenario in &scenarios {
        eprintln!("{}:", scenario.name);
        for &n in scenario.sizes {
            let m = run_one(scenario, &make_grid(&options, n, n), &mut sys);
            eprintln!(
                "  {:>9}  {:<14} {:>10.6}s  {}",
                m.size,
                m.outcome,
                m.wall_s,
                m.verification.status.label()
            );
            measurements.push(m);
        }
    }

    print_summary(&measurements);
    match options.format {
        OutputFormat::Csv => write_csv(&measurements),
        OutputFormat::Table => write_table(&measurements),
        OutputFormat::Json => {
            if let Err(err) = write_json(&measurements) {
                eprintln!("cranes_probe: cannot encode results: {err}");
                std::process::exit(2);
            }
        }
    }

    if measurements
        .iter()
        .any(|m| m.verification.status == VerificationStatus::Failed)
    {
        std::process::exit(1);
    }
}

fn make_grid(options: &Options, rows: usize, columns: usize) -> Grid {
    let cells = rows * columns;
    let free = cells.saturating_sub(2);
    let cranes = (cells * options.crane_percent as usize / 100).min(free);
    let buildings = (cells * options.building_percent as usize / 100).min(free - cranes);
    let mut rng = StdRng::seed_from_u64(options.seed ^ ((rows as u64) << 32) ^ (columns as u64));
    match Grid::random(rows, columns, cranes, buildings, &mut rng) {
        Ok(grid) => grid,
        Err(err) => unreachable!("feature counts are clamped to free cells: {err}"),
    }
}

fn score(solver: &dyn CraneSolver, grid: &Grid) -> Result<u32, CranesError> {
    solver.solve(grid).map(|p| p.total_cranes())
}

fn describe(result: &Result<u32, CranesError>) -> String {
    match result {
        Ok(score) => format!("cranes={score}"),
        Err(CranesError::NoLegalPath { .. }) => "no_path".to_string(),
        Err(err) => format!("error: {err}"),
    }
}

fn run_one(scenario: &Scenario<'_>, grid: &Grid, sys: &mut System) -> Measurement {
    let before = rss_kib(sys);
    let start = Instant::now();
    let result = score(scenario.solver, grid);
    let wall_s = start.elapsed().as_secs_f64();
    let rss_delta_kib = rss_kib(sys).saturating_sub(before);

    Measurement {
        scenario: scenario.name,
        size: format!("{}x{}", grid.rows(), grid.columns()),
        wall_s,
        rss_delta_kib,
        outcome: describe(&result),
        verification: cross_check(scenario, grid, &result),
    }
}

fn cross_check(
    scenario: &Scenario<'_>,
    grid: &Grid,
    result: &Result<u32, CranesError>,
) -> Verification {
    let steps = total_steps(grid.rows(), grid.columns()) as u64;
    if scenario.reference_limit.is_some_and(|limit| steps > limit) {
        return Verification {
            status: VerificationStatus::NotChecked,
            detail: None,
        };
    }
    let expected = score(scenario.reference, grid);
    if &expected == result {
        Verification {
            status: VerificationStatus::Passed,
            detail: None,
        }
    } else {
        Verification {
            status: VerificationStatus::Failed,
            detail: Some(format!(
                "{} says {}, got {}",
                scenario.reference.name(),
                describe(&expected),
                describe(result)
            )),
        }
    }
}

fn print_summary(measurements: &[Measurement]) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for m in measurements {
        *counts.entry(m.verification.status.label()).or_default() += 1;
    }
    eprintln!("\n{} runs: {counts:?}", measurements.len());

    for m in measurements
        .iter()
        .filter(|m| m.verification.status == VerificationStatus::Failed)
    {
        eprintln!(
            "  FAILED {} {}: {}",
            m.scenario,
            m.size,
            m.verification.detail.as_deref().unwrap_or("")
        );
    }
}

/// Quote a CSV field when it holds a separator, quote or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn write_csv(measurements: &[Measurement]) {
    println!("scenario,size,wall_s,rss_delta_kib,outcome,verification_status,verification_detail");
    for m in measurements {
        println!(
            "{},{},{:.6},{},{},{},{}",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            csv_field(&m.outcome),
            m.verification.status.label(),
            csv_field(m.verification.detail.as_deref().unwrap_or(""))
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    println!(
        "{:<10}  {:>9}  {:>10}  {:>13}  {:<14}  {:<11}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "outcome", "status"
    );
    for m in measurements {
        println!(
            "{:<10}  {:>9}  {:>10.6}  {:>13}  {:<14}  {:<11}  {}",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.outcome,
            m.verification.status.label(),
            m.verification.detail.as_deref().unwrap_or("")
        );
    }
}

fn write_json(measurements: &[Measurement]) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(measurements)?);
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |process| process.memory() / 1024)
}
