use clap::{Parser, Subcommand};

use crate::{analyze::AnalyzeArgs, config::Config, segments::SegmentsArgs};

mod analyze;
mod config;
mod decode;
mod file_utils;
mod output;
mod parsers;
mod segments;
mod weather_files;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the coordinates of an encoded polyline
    Decode { polyline: String },
    /// Print the segments and checkpoints of one route, without weather
    Segments {
        #[command(flatten)]
        args: SegmentsArgs,
    },
    /// Score the main route and its alternatives against saved forecasts
    #[command(visible_alias = "a")]
    Analyze {
        #[command(flatten)]
        args: AnalyzeArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = Config::from_env()?;

    match cli.command {
        Commands::Decode { polyline } => decode::run(&polyline)?,
        Commands::Segments { args } => segments::run(args, &config)?,
        Commands::Analyze { args } => analyze::run(args, &config)?,
    }

    Ok(())
}
