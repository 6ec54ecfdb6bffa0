//! Per-day activity scoring.
//!
//! Every scorer is a total function of one [`DayObservation`]: raw
//! contributions are summed, then clamped to 0–100 and rounded through
//! [`clamp_score`].

use crate::error::ValidationError;
use crate::forecast::DailyObservations;
use crate::ranking::classify::WeatherClass;
use crate::ranking::types::{DayObservation, DayScore};
use crate::ranking::utility::clamp_score;

/// Scores every day of a forecast, index-aligned with the input.
///
/// # Errors
///
/// Returns [`ValidationError::LengthMismatch`] when the daily series do not
/// all have the same length.
pub fn score_daily_forecast(daily: &DailyObservations) -> Result<Vec<DayScore>, ValidationError> {
    Ok(daily.days()?.iter().map(score_day).collect())
}

/// Scores a single day for all four activities.
pub fn score_day(day: &DayObservation) -> DayScore {
    let temp_mean = day.temp_mean();
    let class = day.weather_class();

    DayScore {
        date: day.date.clone(),
        skiing: clamp_score(skiing(temp_mean, day.snowfall_sum)),
        surfing: clamp_score(surfing(
            temp_mean,
            day.wind_speed_max,
            day.precipitation_sum,
            class,
        )),
        outdoor_sightseeing: clamp_score(outdoor_sightseeing(
            temp_mean,
            day.precipitation_sum,
            day.precipitation_probability_max,
            class,
        )),
        indoor_sightseeing: clamp_score(indoor_sightseeing(day.precipitation_sum, class)),
    }
}

/// Cold days with fresh snow score highest.
fn skiing(temp_mean: f64, snowfall: f64) -> f64 {
    if temp_mean <= 2.0 {
        50.0 + ((2.0 - temp_mean) * 5.0).min(30.0) + (snowfall * 2.0).min(20.0)
    } else if temp_mean <= 8.0 {
        30.0 + snowfall.min(20.0)
    } else {
        (40.0 - (temp_mean - 8.0) * 5.0).max(0.0)
    }
}

fn surfing(temp_mean: f64, wind_max: f64, precip: f64, class: WeatherClass) -> f64 {
    let wind = surf_wind(wind_max);

    let temp = if temp_mean >= 15.0 {
        30.0
    } else if temp_mean >= 10.0 {
        15.0
    } else {
        0.0
    };

    let dry = if precip < 2.0 && !class.is_snow() {
        30.0
    } else {
        0.0
    };

    wind + temp + dry
}

/// Moderate to strong wind, saturating at 25 km/h and capped again above 45.
fn surf_wind(wind_max: f64) -> f64 {
    if (15.0..=45.0).contains(&wind_max) {
        40.0 + if wind_max >= 25.0 {
            30.0
        } else {
            (wind_max - 15.0) * 2.0
        }
    } else if wind_max > 45.0 {
        50.0
    } else if wind_max >= 10.0 {
        20.0
    } else {
        0.0
    }
}

fn outdoor_sightseeing(temp_mean: f64, precip: f64, precip_prob: f64, class: WeatherClass) -> f64 {
    let sky = if class.is_clear_or_partly_cloudy() {
        40.0
    } else {
        10.0
    };

    let temp = if (12.0..=28.0).contains(&temp_mean) {
        40.0
    } else if (8.0..=32.0).contains(&temp_mean) {
        25.0
    } else {
        10.0
    };

    let dry = if precip < 1.0 && precip_prob < 30.0 {
        20.0
    } else {
        0.0
    };

    sky + temp + dry
}

/// Rises as outdoor conditions get worse.
fn indoor_sightseeing(precip: f64, class: WeatherClass) -> f64 {
    let base = if class.is_rain_or_storm() || precip > 2.0 {
        70.0
    } else {
        50.0
    };

    let weather = if class.is_clear_or_partly_cloudy() {
        0.0
    } else {
        20.0
    };

    base + weather
}
