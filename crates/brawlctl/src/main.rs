//! brawlctl - interactive brawler upgrade cost calculator
//!
//! Asks how far a brawler should be leveled and which gear should be
//! bought along the way, then prints the gold and power-point bill.

mod errors;
mod prompt;
mod render;

use anyhow::{Context, Result};
use brawl_common::{calc, CostTable};
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resource table filename looked up in the working directory when no
/// override is given.
const DEFAULT_RESOURCES: &str = "upgrade-resources.json";

/// Environment variable overriding the resource table location.
const RESOURCES_ENV: &str = "BRAWLCTL_RESOURCES";

#[derive(Parser)]
#[command(name = "brawlctl")]
#[command(about = "Calculate the gold and power points a brawler upgrade costs", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the upgrade resource table (JSON)
    #[arg(long)]
    resources: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".bright_red().bold());
            std::process::exit(errors::EXIT_GENERAL_ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let path = resource_path(cli.resources);
    tracing::debug!(path = %path.display(), "using resource table");

    let table = match CostTable::load(&path) {
        Ok(table) => table,
        Err(err) => {
            tracing::debug!(error = %err, "resource table rejected");
            eprintln!(
                "{}",
                "Cannot calculate level-up resources: upgrade resource table missing or malformed."
                    .bright_red()
            );
            eprintln!("  {}", err.to_string().dimmed());
            return Ok(errors::EXIT_RESOURCES_UNAVAILABLE);
        }
    };

    let request = prompt::run_flow().context("reading answers")?;
    tracing::debug!(?request, "upgrade request collected");

    let leveling = calc::leveling_cost(&table, request.initial_level, request.target_level)
        .context("computing level-up cost")?;
    let gears = calc::gear_cost(&table, &request);

    render::print_leveling(&request, leveling);

    // Nothing to buy: the level-up section is the whole report.
    if gears == 0 {
        return Ok(errors::EXIT_SUCCESS);
    }

    render::print_gears(&request, gears);
    render::print_total(leveling, gears);
    Ok(errors::EXIT_SUCCESS)
}

/// Resource table discovery: flag, then environment, then working directory.
fn resource_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Ok(path) = std::env::var(RESOURCES_ENV) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_RESOURCES)
}
