//! Trait and types for interacting with a geocoding + forecast provider.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ValidationError;
use crate::forecast::DailyObservations;

/// Longest horizon the forecast provider serves.
pub const MAX_FORECAST_DAYS: i64 = 16;

/// Errors raised while talking to the provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A geocoding candidate.
///
/// Deserialized from the provider's snake_case JSON, serialized as camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    #[serde(
        default,
        rename(serialize = "countryCode", deserialize = "country_code")
    )]
    pub country_code: String,
    #[serde(default)]
    pub country: String,
    /// First-level administrative area, when the provider knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin1: Option<String>,
}

/// A validated forecast lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub days: u8,
}

impl ForecastRequest {
    /// # Errors
    ///
    /// Rejects coordinates outside the globe and day counts outside
    /// `0..=MAX_FORECAST_DAYS`.
    pub fn new(
        latitude: f64,
        longitude: f64,
        timezone: impl Into<String>,
        days: i64,
    ) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::Coordinates {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
            timezone: timezone.into(),
            days: validate_day_count(days)?,
        })
    }

    pub fn for_location(location: &Location, days: i64) -> Result<Self, ValidationError> {
        Self::new(
            location.latitude,
            location.longitude,
            location.timezone.clone(),
            days,
        )
    }
}

/// Checks a requested horizon and narrows it to the wire type.
pub fn validate_day_count(days: i64) -> Result<u8, ValidationError> {
    if !(0..=MAX_FORECAST_DAYS).contains(&days) {
        return Err(ValidationError::DayCount {
            days,
            max: MAX_FORECAST_DAYS,
        });
    }
    // bounded by MAX_FORECAST_DAYS above
    Ok(days as u8)
}

/// Abstraction over a weather data provider (e.g., Open-Meteo).
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Returns candidate locations for a free-text name, best match first.
    async fn search_location(&self, name: &str) -> Result<Vec<Location>, ProviderError>;

    /// Returns the daily forecast series for a location.
    async fn get_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<DailyObservations, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_day_count() {
        assert_eq!(validate_day_count(0), Ok(0));
        assert_eq!(validate_day_count(7), Ok(7));
        assert_eq!(validate_day_count(16), Ok(16));
        assert_eq!(
            validate_day_count(-1),
            Err(ValidationError::DayCount { days: -1, max: 16 })
        );
        assert!(validate_day_count(17).is_err());
    }

    #[test]
    fn test_forecast_request_rejects_bad_coordinates() {
        assert!(ForecastRequest::new(46.02, 7.75, "Europe/Zurich", 7).is_ok());
        assert!(ForecastRequest::new(90.0, -180.0, "UTC", 7).is_ok());
        assert!(matches!(
            ForecastRequest::new(91.0, 0.0, "UTC", 7),
            Err(ValidationError::Coordinates { .. })
        ));
        assert!(ForecastRequest::new(0.0, 181.0, "UTC", 7).is_err());
        assert!(ForecastRequest::new(0.0, 0.0, "UTC", -3).is_err());
    }

    #[test]
    fn test_location_wire_and_output_names() {
        let json = r#"{
            "id": 2657928,
            "name": "Zermatt",
            "latitude": 46.01998,
            "longitude": 7.74863,
            "elevation": 1608.0,
            "timezone": "Europe/Zurich",
            "country_code": "CH",
            "country": "Switzerland",
            "admin1": "Valais"
        }"#;

        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.country_code, "CH");
        assert_eq!(location.admin1.as_deref(), Some("Valais"));

        let out = serde_json::to_value(&location).unwrap();
        assert_eq!(out["countryCode"], "CH");
        assert!(out.get("country_code").is_none());

        let request = ForecastRequest::for_location(&location, 7).unwrap();
        assert_eq!(request.timezone, "Europe/Zurich");
        assert_eq!(request.days, 7);
    }
}
