use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use u_delivery::config::{
    Delimiter, PlannerConfig, DEFAULT_DEPOT, DEFAULT_MAP_PATH, DEFAULT_PACKAGES_PATH,
};
use u_delivery::io::{load_graph, load_packages};
use u_delivery::planner::plan_deliveries;

/// Plans a single-vehicle delivery tour from a map file and a package list.
#[derive(Parser, Debug)]
#[command(about, version, author)]
struct Args {
    /// Map file with one `FROM TO DISTANCE` record per line.
    #[arg(short, long, default_value = DEFAULT_MAP_PATH)]
    map: PathBuf,

    /// Package file with one `PACKAGE_ID DESTINATION` record per line.
    #[arg(short, long, default_value = DEFAULT_PACKAGES_PATH)]
    packages: PathBuf,

    /// Start and end location of the tour.
    #[arg(short, long, default_value = DEFAULT_DEPOT)]
    depot: String,

    /// Field separator: `whitespace`, `tab`, or a punctuation character.
    #[arg(long, default_value = "whitespace")]
    delimiter: Delimiter,

    /// Precompute all-pairs distances before routing.
    #[arg(long)]
    precompute: bool,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

impl From<Args> for PlannerConfig {
    fn from(args: Args) -> Self {
        Self {
            depot: args.depot,
            map_path: args.map,
            packages_path: args.packages,
            delimiter: args.delimiter,
            precompute_distances: args.precompute,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let json = args.json;
    let config = PlannerConfig::from(args);

    let mut graph = load_graph(&config.map_path, config.delimiter)
        .with_context(|| format!("could not load map data from {}", config.map_path.display()))?;
    let packages = load_packages(&config.packages_path, config.delimiter).with_context(|| {
        format!(
            "could not load package data from {}",
            config.packages_path.display()
        )
    })?;

    let report =
        plan_deliveries(&mut graph, &packages, &config).context("program halted")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    if !report.complete {
        warn!(
            visited = report.stops.len().saturating_sub(2),
            unreached = report.unreached.len(),
            "some destinations could not be reached"
        );
    }
    Ok(())
}
