//! lambdasim - N-step simulation of a fluctuating cosmological term
//!
//! This is the operational entry point for the fluctuating-lambda
//! simulator.
//!
//! # Usage
//!
//! - `lambdasim 1000` - run a 1000-step simulation, wall-clock seeded
//! - `lambdasim 1000 --seed 42` - reproducible run
//! - `lambdasim 1000 --output run.txt --distances dl.txt` - custom paths
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! engine: it validates the arguments, runs the recurrence under a split
//! timer, logs a statistics summary of the lambda series, and writes the
//! two-column output file.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cosmo_core::{RunningStats, SplitTimer};
use cosmo_engine::output::{write_column, write_series};
use cosmo_engine::sim::{SimulationConfig, Simulator};

mod error;

pub use error::{CliError, Result};

/// Fluctuating-lambda simulator CLI
#[derive(Parser)]
#[command(name = "lambdasim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of steps in the simulation
    steps: usize,

    /// Seed for reproducible runs (wall-clock seeded when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output file path for the (tau, lambda) series
    #[arg(short, long, default_value = "lambda.txt")]
    output: PathBuf,

    /// Optional output path for the derived luminosity-distance curve
    #[arg(short, long)]
    distances: Option<PathBuf>,

    /// Show the per-step progress lines
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise tracing; --verbose raises the filter so the per-step
    // progress lines become visible.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::INFO.into())
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    if let Err(err) = run(cli) {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    info!("Running simulation for {} steps", cli.steps);

    let mut builder = SimulationConfig::builder().steps(cli.steps);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    let mut simulator = Simulator::new(config)?;
    info!("Seed: {}", simulator.seed());

    let mut timer = SplitTimer::start("simulation");
    simulator.run()?;
    timer.split();

    let pairs = simulator.export_series()?;

    let mut stats = RunningStats::new();
    for &(_, lambda) in &pairs {
        stats.push(lambda);
    }
    info!("Lambda series: {}", stats);

    write_series(&cli.output, &pairs)?;
    info!("Wrote {} lines to {}", pairs.len(), cli.output.display());

    if let Some(path) = &cli.distances {
        let distances = simulator.luminosity_distances()?;
        write_column(path, &distances)?;
        info!("Wrote luminosity distances to {}", path.display());
    }

    info!(
        "The process \"{}\" took {:.3}s",
        timer.label(),
        timer.total().as_secs_f64()
    );
    Ok(())
}
