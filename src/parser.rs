//! JSON parser for Open-Meteo forecast documents.

use anyhow::Result;
use serde::Deserialize;

use crate::forecast::{DailyObservations, ForecastResponse};

#[derive(Deserialize)]
#[serde(untagged)]
enum ForecastDocument {
    Full(ForecastResponse),
    Daily(DailyObservations),
}

/// Decodes the daily series from either a full forecast response or a bare
/// `daily` object.
///
/// # Errors
///
/// Returns an error if the bytes are not JSON in either shape.
pub fn parse_forecast(bytes: &[u8]) -> Result<DailyObservations> {
    let daily = match serde_json::from_slice::<ForecastDocument>(bytes)? {
        ForecastDocument::Full(response) => response.daily,
        ForecastDocument::Daily(daily) => daily,
    };
    Ok(daily)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAILY: &str = r#"{
        "time": ["2026-01-10", "2026-01-11"],
        "temperature_2m_max": [-2.0, 1.5],
        "temperature_2m_min": [-6.0, null],
        "precipitation_sum": [0.0, 1.2],
        "snowfall_sum": [5.0, 0.8],
        "precipitation_probability_max": [10, 45],
        "weather_code": [71, 73],
        "wind_speed_10m_max": [5.0, 11.4]
    }"#;

    #[test]
    fn test_parse_bare_daily_object() {
        let daily = parse_forecast(DAILY.as_bytes()).unwrap();
        assert_eq!(daily.len(), 2);
        assert_eq!(daily.temperature_min[1], None);
    }

    #[test]
    fn test_parse_full_response() {
        let json = format!(
            r#"{{"latitude": 46.02, "longitude": 7.75, "timezone": "Europe/Zurich", "daily": {DAILY}}}"#
        );
        let daily = parse_forecast(json.as_bytes()).unwrap();
        assert_eq!(daily.date, vec!["2026-01-10", "2026-01-11"]);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_forecast(b"not json").is_err());
        assert!(parse_forecast(br#"{"time": ["2026-01-10"]}"#).is_err());
    }
}
