use anyhow::{Result, anyhow};
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

use crate::config::ScenarioConfig;
use crate::layout::RngSource;

mod config;
mod export;
mod layout;
mod scene;

/// Two-tier radio deployment scenario generator: macro sites on a hex grid
/// plus randomly scattered apartment blocks of indoor sites.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the scenario configuration file (TOML); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the scene document and plot overlays are written to
    #[arg(short, long, default_value = "out")]
    output: PathBuf,

    /// Seed for the placement random stream (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging setup
    let level: LevelFilter = args
        .log_level
        .parse()
        .map_err(|_| anyhow!("invalid log level: {}", args.log_level))?;
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("hetnet_scenario_generator"), level)
        .init();

    info!("Starting up");

    let config = match &args.config {
        Some(path) => {
            info!("Loading scenario configuration from {}", path.display());
            ScenarioConfig::load(path).map_err(|e| anyhow!(e))?
        }
        None => ScenarioConfig::default(),
    };
    config.validate().map_err(|e| anyhow!("invalid scenario configuration: {}", e))?;

    let rng = match args.seed.or(config.seed) {
        Some(seed) => {
            info!("Using placement seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let scenario = scene::build_scenario(&config, RngSource::new(rng))?;

    info!(
        "Generated {} macro site(s), {} block(s) with {} building(s), {} home site(s)",
        scenario.macro_sites.len(),
        scenario.blocks.len(),
        scenario.blocks.iter().map(|b| b.buildings.len()).sum::<usize>(),
        scenario.home_site_count
    );

    export::write_outputs(&args.output, &scenario)?;
    info!("Scenario written to {}", args.output.display());

    Ok(())
}
