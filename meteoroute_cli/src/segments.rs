use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Args;
use jiff::Zoned;
use meteoroute::analysis::{RouteAnalyzer, build_checkpoints};
use tracing::info;

use crate::{config::Config, file_utils::read_directions, output, parsers};

#[derive(Args)]
pub struct SegmentsArgs {
    /// Directions service response (JSON)
    #[arg(short, long)]
    directions: PathBuf,

    /// Index of the route in the response, 0 being the recommended one
    #[arg(short, long, default_value_t = 0)]
    route: usize,

    /// Departure time (default: now)
    #[arg(long)]
    departure: Option<String>,
}

pub fn run(args: SegmentsArgs, config: &Config) -> Result<(), anyhow::Error> {
    let response = read_directions(&args.directions)?;
    let route = response
        .routes
        .get(args.route)
        .with_context(|| format!("Route {} not found, the response has {}", args.route, response.routes.len()))?;

    let departure = match args.departure {
        Some(input) => parsers::parse_departure(&input, &config.time_zone).map_err(|err| anyhow!(err))?,
        None => Zoned::now().with_time_zone(config.time_zone.clone()),
    };

    info!("Route '{}': {} legs, {} steps", route.summary, route.legs.len(), route.steps_count());

    let segments = RouteAnalyzer::default().analyze(route)?;
    let checkpoints = build_checkpoints(&segments, &departure)?;

    println!("{}", output::segments_table(&segments));
    println!("{}", output::checkpoints_table(&checkpoints));
    println!("Checkpoint path: {}", output::checkpoints_polyline(&checkpoints));

    Ok(())
}
