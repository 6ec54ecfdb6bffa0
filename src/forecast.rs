//! Daily forecast data as delivered by the provider.
//!
//! [`DailyObservations`] mirrors the Open-Meteo `daily` object: a
//! structure of arrays, one entry per forecast day. It is converted into
//! one [`DayObservation`] per index before any scoring happens.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ranking::types::DayObservation;
use crate::ranking::utility::or_zero;

/// Time-aligned daily series. Index `i` of every vector describes the same day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyObservations {
    #[serde(rename = "time")]
    pub date: Vec<String>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<Option<f64>>,
    pub precipitation_sum: Vec<Option<f64>>,
    pub snowfall_sum: Vec<Option<f64>>,
    pub precipitation_probability_max: Vec<Option<f64>>,
    pub weather_code: Vec<Option<f64>>,
    #[serde(rename = "wind_speed_10m_max")]
    pub wind_speed_max: Vec<Option<f64>>,
}

/// Full forecast document returned by the forecast endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub daily: DailyObservations,
}

impl DailyObservations {
    /// Number of forecast days, taken from the `time` series.
    pub fn len(&self) -> usize {
        self.date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_empty()
    }

    /// Checks that every series has as many entries as `time`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LengthMismatch`] naming the first series
    /// that is out of line.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let expected = self.date.len();
        let series: [(&'static str, usize); 7] = [
            ("temperature_2m_max", self.temperature_max.len()),
            ("temperature_2m_min", self.temperature_min.len()),
            ("precipitation_sum", self.precipitation_sum.len()),
            ("snowfall_sum", self.snowfall_sum.len()),
            (
                "precipitation_probability_max",
                self.precipitation_probability_max.len(),
            ),
            ("weather_code", self.weather_code.len()),
            ("wind_speed_10m_max", self.wind_speed_max.len()),
        ];

        match series.iter().find(|(_, len)| *len != expected) {
            Some(&(field, actual)) => Err(ValidationError::LengthMismatch {
                field,
                expected,
                actual,
            }),
            None => Ok(()),
        }
    }

    /// Splits the series into one scalar record per day, with every missing
    /// value normalized to zero.
    ///
    /// # Errors
    ///
    /// Fails when the series lengths disagree, see [`Self::validate`].
    pub fn days(&self) -> Result<Vec<DayObservation>, ValidationError> {
        self.validate()?;

        let days = (0..self.len())
            .map(|i| DayObservation {
                date: self.date[i].clone(),
                temperature_max: or_zero(self.temperature_max[i]),
                temperature_min: or_zero(self.temperature_min[i]),
                precipitation_sum: or_zero(self.precipitation_sum[i]),
                snowfall_sum: or_zero(self.snowfall_sum[i]),
                precipitation_probability_max: or_zero(self.precipitation_probability_max[i]),
                weather_code: or_zero(self.weather_code[i]),
                wind_speed_max: or_zero(self.wind_speed_max[i]),
            })
            .collect();

        Ok(days)
    }
}
