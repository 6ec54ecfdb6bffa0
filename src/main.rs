//! CLI entry point for the weather activity rater.
//!
//! Provides subcommands for ranking a city by name, listing geocoding
//! candidates, and scoring a forecast document from a file or URL.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use weather_activity_rater::{
    config::Config,
    fetch::{BasicClient, fetch_bytes},
    infra::openmeteo::OpenMeteoClient,
    output::{append_day_scores, append_ranking, log_day, log_ranking, print_json, print_pretty},
    parser::parse_forecast,
    ranking::{aggregate_scores, pipeline::rank_city, score_daily_forecast},
    services::weather_api::WeatherProvider,
};

#[derive(Parser)]
#[command(name = "weather_activity_rater")]
#[command(about = "Rank a location's 7-day forecast for skiing, surfing and sightseeing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the forecast of a city found by name
    Rank {
        /// City name to search for
        #[arg(value_name = "CITY")]
        city: String,

        /// Forecast horizon in days (defaults to FORECAST_DAYS)
        #[arg(short, long, allow_negative_numbers = true)]
        days: Option<i64>,

        /// Optional: CSV file to append per-day scores to
        #[arg(short, long)]
        output: Option<String>,

        /// Print the full ranking as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List geocoding candidates for a name
    Search {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Score an Open-Meteo forecast JSON document from a file or URL
    Score {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Optional: CSV file to append per-day scores to
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let config = Config::from_env()?;

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = Path::new(&config.log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&config.log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("weather_activity_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            city,
            days,
            output,
            json,
        } => {
            let provider = OpenMeteoClient::from_config(&config)?;
            let days = days.unwrap_or(config.forecast_days);

            let Some(ranking) = rank_city(&provider, &city, days).await? else {
                warn!(city = %city, "No ranking available for city");
                return Ok(());
            };

            print_pretty(&ranking);
            log_ranking(&ranking);

            if json {
                print_json(&ranking)?;
            }
            if let Some(path) = output {
                append_ranking(&path, &ranking)
                    .with_context(|| format!("failed to append ranking to {path}"))?;
            }
        }
        Commands::Search { name } => {
            let provider = OpenMeteoClient::from_config(&config)?;
            let locations = provider.search_location(name.trim()).await?;

            info!(total = locations.len(), "Locations fetched");

            for location in &locations {
                info!(
                    id = location.id,
                    name = %location.name,
                    region = location.admin1.as_deref().unwrap_or(""),
                    country = %location.country,
                    lat = location.latitude,
                    lon = location.longitude,
                    timezone = %location.timezone,
                    "Location"
                );
            }
        }
        Commands::Score { source, output } => {
            let bytes = fetcher(&source).await?;
            let daily = parse_forecast(&bytes)?;
            let scores = score_daily_forecast(&daily)?;
            let overall = aggregate_scores(&scores);

            for day in &scores {
                log_day(day);
            }
            print_json(&overall)?;

            if let Some(path) = output {
                append_day_scores(&path, None, &scores)?;
            }
        }
    }

    Ok(())
}

/// Loads forecast data from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %url))]
async fn fetcher(url: &str) -> Result<Vec<u8>> {
    let bytes = if url.starts_with("http") {
        let client = BasicClient::new();
        fetch_bytes(&client, url).await?
    } else {
        std::fs::read(url).with_context(|| format!("failed to read {url}"))?
    };
    Ok(bytes)
}
