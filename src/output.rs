//! Output formatting and persistence for activity rankings.
//!
//! Supports pretty-printing, JSON serialization, and CSV append.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::ranking::types::{CityRanking, DayScore};
use crate::services::weather_api::Location;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// One CSV row: a day's scores plus the location they belong to.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DayRow<'a> {
    location_id: Option<i64>,
    location: &'a str,
    country_code: &'a str,
    date: &'a str,
    skiing: u8,
    surfing: u8,
    outdoor_sightseeing: u8,
    indoor_sightseeing: u8,
}

/// Logs a ranking using Rust's debug pretty-print format.
pub fn print_pretty(ranking: &CityRanking) {
    debug!("{:#?}", ranking);
}

/// Logs any serializable value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Logs one line per day followed by the overall line.
pub fn log_ranking(ranking: &CityRanking) {
    for day in &ranking.daily {
        log_day(day);
    }

    let overall = &ranking.overall;
    info!(
        location = %ranking.location.name,
        skiing = overall.skiing,
        surfing = overall.surfing,
        outdoor_sightseeing = overall.outdoor_sightseeing,
        indoor_sightseeing = overall.indoor_sightseeing,
        "Overall"
    );
}

pub fn log_day(day: &DayScore) {
    info!(
        date = %day.date,
        skiing = day.skiing,
        surfing = day.surfing,
        outdoor_sightseeing = day.outdoor_sightseeing,
        indoor_sightseeing = day.indoor_sightseeing,
        "Day"
    );
}

/// Appends every day of a [`CityRanking`] as a row to a CSV file.
pub fn append_ranking(path: &str, ranking: &CityRanking) -> Result<()> {
    append_day_scores(path, Some(&ranking.location), &ranking.daily)
}

/// Appends [`DayScore`] rows to a CSV file.
///
/// Creates the file with headers if it does not already exist. Location
/// columns are left empty when no location is given.
pub fn append_day_scores(path: &str, location: Option<&Location>, days: &[DayScore]) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, rows = days.len(), "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for day in days {
        writer.serialize(DayRow {
            location_id: location.map(|l| l.id),
            location: location.map_or("", |l| l.name.as_str()),
            country_code: location.map_or("", |l| l.country_code.as_str()),
            date: &day.date,
            skiing: day.skiing,
            surfing: day.surfing,
            outdoor_sightseeing: day.outdoor_sightseeing,
            indoor_sightseeing: day.indoor_sightseeing,
        })?;
    }
    writer.flush()?;

    Ok(())
}
