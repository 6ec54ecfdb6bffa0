//! Runtime configuration, read from the environment (and `.env`).

use anyhow::{Context, Result};

use crate::services::weather_api::validate_day_count;

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_FORECAST_DAYS: i64 = 7;
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/weather_activity_rater.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub geocoding_url: String,
    pub forecast_url: String,
    /// Open-Meteo customer API key, sent as `apikey` when set.
    pub api_key: Option<String>,
    pub forecast_days: i64,
    pub log_file_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            api_key: None,
            forecast_days: DEFAULT_FORECAST_DAYS,
            log_file_path: DEFAULT_LOG_FILE_PATH.to_string(),
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for unset keys.
    ///
    /// # Errors
    ///
    /// Fails when `FORECAST_DAYS` is not an integer or is outside the provider's range.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let forecast_days = match non_empty("FORECAST_DAYS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("FORECAST_DAYS must be an integer, got '{raw}'"))?,
            None => defaults.forecast_days,
        };
        validate_day_count(forecast_days).context("FORECAST_DAYS is out of range")?;

        Ok(Self {
            geocoding_url: non_empty("OPEN_METEO_GEOCODING_URL").unwrap_or(defaults.geocoding_url),
            forecast_url: non_empty("OPEN_METEO_FORECAST_URL").unwrap_or(defaults.forecast_url),
            api_key: non_empty("OPEN_METEO_API_KEY"),
            forecast_days,
            log_file_path: non_empty("LOG_FILE_PATH").unwrap_or(defaults.log_file_path),
        })
    }
}
