//! Data types used by the scoring pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ranking::classify::WeatherClass;
use crate::services::weather_api::Location;

/// One forecast day with every missing value already normalized to zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayObservation {
    pub date: String,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub precipitation_sum: f64,
    pub snowfall_sum: f64,
    pub precipitation_probability_max: f64,
    pub weather_code: f64,
    pub wind_speed_max: f64,
}

impl DayObservation {
    /// Mean of the day's maximum and minimum temperature.
    pub fn temp_mean(&self) -> f64 {
        (self.temperature_max + self.temperature_min) / 2.0
    }

    /// WMO code rounded to the nearest integer.
    pub fn weather_code(&self) -> i64 {
        self.weather_code.round() as i64
    }

    pub fn weather_class(&self) -> WeatherClass {
        WeatherClass::from_wmo_code(self.weather_code())
    }
}

/// Activity scores (0–100) for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayScore {
    pub date: String,
    pub skiing: u8,
    pub surfing: u8,
    pub outdoor_sightseeing: u8,
    pub indoor_sightseeing: u8,
}

/// Activity scores (0–100) averaged over the whole forecast horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallScore {
    pub skiing: u8,
    pub surfing: u8,
    pub outdoor_sightseeing: u8,
    pub indoor_sightseeing: u8,
}

/// Ranking result for one resolved location.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRanking {
    pub location: Location,
    pub overall: OverallScore,
    pub daily: Vec<DayScore>,
    pub generated_at: DateTime<Utc>,
}
