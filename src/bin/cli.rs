//! Lodestone scraper CLI
//!
//! Local driver for the scraping operations, standing in for an HTTP
//! routing layer. Prints the JSON envelope a route handler would return.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lodestone_scraper::{
    config::ScraperConfig,
    error::Result,
    models::{AchievementsResponse, DetailResponse, ErrorResponse, SearchResponse},
    services::{CharacterService, DataCenterIndex},
};

/// Lodestone character scraper
#[derive(Parser, Debug)]
#[command(name = "lodestone", version, about = "Scrapes FFXIV character data")]
struct Cli {
    /// Region base URL (language/region selection happens outside this tool)
    #[arg(long, default_value = "https://na.finalfantasyxiv.com")]
    base_url: String,

    /// Path to the scraper configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search characters by name, optionally on one server
    Search {
        name: String,

        /// Server (world) name; any casing
        #[arg(short, long, default_value = "")]
        server: String,
    },

    /// Fetch a character's profile by ID
    Detail { id: String },

    /// Fetch a character's achievement categories by ID
    Achievements { id: String },

    /// List known regions, data centers, and servers
    Worlds,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

async fn run(cli: Cli) -> Result<String> {
    let config = ScraperConfig::load_or_default(&cli.config);
    config.validate()?;

    let index = Arc::new(DataCenterIndex::new(&config.data_centers_path));
    let service = CharacterService::new(&config, Arc::clone(&index))?;

    match cli.command {
        Command::Search { name, server } => {
            let characters = service.search(&cli.base_url, &name, &server).await?;
            Ok(serde_json::to_string_pretty(&SearchResponse::new(
                characters,
            ))?)
        }

        Command::Detail { id } => {
            let character = service.detail(&cli.base_url, &id).await?;
            Ok(serde_json::to_string_pretty(&DetailResponse::new(
                character,
            ))?)
        }

        Command::Achievements { id } => {
            let achievements = service.achievements(&cli.base_url, &id).await?;
            Ok(serde_json::to_string_pretty(&AchievementsResponse::new(
                achievements,
            ))?)
        }

        Command::Worlds => {
            index.load().await?;
            let mut regions = serde_json::Map::new();
            for region in index.all_regions() {
                let mut centers = serde_json::Map::new();
                for dc in index.data_centers_of(region) {
                    centers.insert(dc.to_string(), serde_json::json!(index.servers_of(dc)));
                }
                regions.insert(region.to_string(), serde_json::Value::Object(centers));
            }
            Ok(serde_json::to_string_pretty(&serde_json::Value::Object(
                regions,
            ))?)
        }
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(json) => println!("{json}"),
        Err(error) => {
            log::error!("request failed with status {}: {error}", error.status_code());
            let body = ErrorResponse::from_error(&error);
            match serde_json::to_string_pretty(&body) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{error}"),
            }
            std::process::exit(1);
        }
    }
}
