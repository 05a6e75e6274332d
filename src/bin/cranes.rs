use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cranes::{Algorithm, CranesEngineBuilder, CranesError, Grid};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser, Debug)]
#[command(name = "cranes", version, about = "Find the path that visits the most cranes.")]
struct Cli {
    /// Grid file ('.' empty, 'c' crane, 'X' building). Reads stdin when omitted.
    #[arg(conflicts_with = "random")]
    grid: Option<PathBuf>,

    /// Solver to run: "dyn-prog" or "exhaustive".
    #[arg(short, long, default_value_t = Algorithm::DynamicProgramming)]
    algorithm: Algorithm,

    /// Generate a random grid of the given size instead, e.g. "8x12".
    #[arg(long, value_name = "ROWSxCOLUMNS", value_parser = parse_size)]
    random: Option<(usize, usize)>,

    /// Cranes placed on a random grid.
    #[arg(long, default_value_t = 0, requires = "random")]
    cranes: usize,

    /// Buildings placed on a random grid.
    #[arg(long, default_value_t = 0, requires = "random")]
    buildings: usize,

    /// Seed for the random grid.
    #[arg(long, default_value_t = 42, requires = "random")]
    seed: u64,

    /// Lower the exhaustive solver's step limit (at most 63).
    #[arg(long, value_parser = clap::value_parser!(u64).range(0..=63))]
    step_limit: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_size(value: &str) -> Result<(usize, usize), String> {
    let (rows, columns) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLUMNS, got '{value}'"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|_| format!("'{s}' is not a whole number"))
    };
    Ok((parse(rows)?, parse(columns)?))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cranes: {err}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Cranes(#[from] CranesError),
    #[error("cannot read grid: {0}")]
    Io(#[from] io::Error),
}

fn load_grid(cli: &Cli) -> Result<Grid, CliError> {
    if let Some((rows, columns)) = cli.random {
        let mut rng = StdRng::seed_from_u64(cli.seed);
        tracing::info!(rows, columns, cranes = cli.cranes, buildings = cli.buildings, seed = cli.seed, "random grid");
        return Ok(Grid::random(rows, columns, cli.cranes, cli.buildings, &mut rng)?);
    }
    let text = match &cli.grid {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading grid");
            fs::read_to_string(path)?
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    Ok(text.parse::<Grid>()?)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let grid = load_grid(cli)?;
    let mut builder = CranesEngineBuilder::new().algorithm(cli.algorithm);
    if let Some(limit) = cli.step_limit {
        builder = builder.exhaustive_step_limit(limit as usize);
    }
    let engine = builder.build();

    let (score, path) = engine.run(&grid)?;
    print!("{}", path.render());
    println!("steps: {path}");
    println!("cranes: {score}");
    Ok(())
}
