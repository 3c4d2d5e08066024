use std::path::PathBuf;

use anyhow::anyhow;
use clap::Args;
use meteoroute::travel::TravelPlanner;
use tracing::info;

use crate::{config::Config, file_utils::read_directions, output, parsers, weather_files::ForecastIndex};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Directions service response (JSON)
    #[arg(short, long)]
    directions: PathBuf,

    /// Weather service response, or a folder of them
    #[arg(short, long)]
    weather: PathBuf,

    /// Departure time, e.g. "2024-02-03T07:30", "2024-02-03T07:30:00+01:00"
    /// or "2024-02-03T07:30[Europe/Rome]"
    #[arg(long)]
    departure: String,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: AnalyzeArgs, config: &Config) -> Result<(), anyhow::Error> {
    let departure = parsers::parse_departure(&args.departure, &config.time_zone).map_err(|err| anyhow!(err))?;
    let response = read_directions(&args.directions)?;
    let forecasts = ForecastIndex::load(&args.weather, config.max_station_distance)?;

    info!(
        "Analyzing {} routes departing at {}",
        response.routes.len(),
        departure
    );

    let planner = TravelPlanner::new(forecasts);
    let outcome = planner.analyze_response(&response, &departure)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        output::print_outcome(&outcome);
    }

    Ok(())
}
