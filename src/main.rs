//! Headless host for the ecocycle simulation: builds an ecosystem from a
//! parameter file and flags, runs the tick loop and reports populations.

use std::path::PathBuf;

use clap::Parser;
use ecocycle::simulation::ecosystem::Ecosystem;
use ecocycle::simulation::params::Params;
use tracing::info;

/// Headless grass, prey and predator simulation.
#[derive(Debug, Parser)]
#[command(name = "ecocycle", version)]
struct Cli {
    /// JSON parameter file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Grid height in cells.
    #[arg(long)]
    height: Option<usize>,
    /// Grid width in cells.
    #[arg(long)]
    width: Option<usize>,
    /// Initial prey population.
    #[arg(long)]
    prey: Option<usize>,
    /// Initial predator population.
    #[arg(long)]
    predators: Option<usize>,
    /// Random seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of ticks to run.
    #[arg(long, default_value_t = 100)]
    ticks: u64,
    /// Write the population series to this JSON file.
    #[arg(long)]
    metrics_out: Option<PathBuf>,
    /// Write the final snapshot to this JSON file.
    #[arg(long)]
    snapshot_out: Option<PathBuf>,
}

impl Cli {
    fn params(&self) -> Result<Params, Box<dyn std::error::Error>> {
        let mut params = match &self.config {
            Some(path) => Params::load_from_file(path)?,
            None => Params::default(),
        };
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(prey) = self.prey {
            params.prey_count = prey;
        }
        if let Some(predators) = self.predators {
            params.predator_count = predators;
        }
        if let Some(seed) = self.seed {
            params.seed = seed;
        }
        params.validate()?;
        Ok(params)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();
    let params = cli.params()?;
    let mut ecosystem = Ecosystem::new(&params)?;

    println!("Step 0: {}", ecosystem.census());

    for _ in 0..cli.ticks {
        if !ecosystem.running {
            break;
        }
        ecosystem.step();

        let sample = ecosystem.census();
        let report = ecosystem.last_tick();
        info!(
            tick = sample.tick,
            prey = sample.prey,
            predators = sample.predators,
            grown_grass = sample.grown_grass,
            births = report.births(),
            deaths = report.deaths(),
            "tick"
        );
        println!("Step {}: {}", sample.tick, sample);
    }

    let totals = ecosystem.totals();
    println!(
        "Totals: {} prey born, {} predators born, {} prey eaten, {} grass eaten",
        totals.prey_born, totals.predators_born, totals.prey_eaten, totals.grass_eaten
    );

    if let Some(path) = &cli.metrics_out {
        ecosystem.metrics.save_to_file(&path.to_string_lossy())?;
        info!(path = %path.display(), samples = ecosystem.metrics.len(), "metrics written");
    }

    if let Some(path) = &cli.snapshot_out {
        let json = serde_json::to_string_pretty(&ecosystem.snapshot())?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), "snapshot written");
    }

    Ok(())
}
