//! Activity scoring.
//!
//! Converts daily forecast series into 0–100 scores for skiing, surfing,
//! outdoor and indoor sightseeing, then averages them over the horizon.
//! [`scorers`] and [`aggregate`] are pure; [`pipeline`] ties them to a
//! [`WeatherProvider`](crate::services::weather_api::WeatherProvider).

pub mod aggregate;
pub mod classify;
pub mod pipeline;
pub mod scorers;
pub mod types;
pub mod utility;

pub use aggregate::aggregate_scores;
pub use scorers::{score_daily_forecast, score_day};
