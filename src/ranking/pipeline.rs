use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};

use crate::ranking::aggregate::aggregate_scores;
use crate::ranking::scorers::score_daily_forecast;
use crate::ranking::types::CityRanking;
use crate::services::weather_api::{ForecastRequest, WeatherProvider};

/// Resolves `city` through the provider and scores its forecast.
///
/// Returns `Ok(None)` for a blank name or when geocoding finds nothing; the
/// first candidate is used otherwise.
#[tracing::instrument(skip(provider))]
pub async fn rank_city<P>(provider: &P, city: &str, days: i64) -> Result<Option<CityRanking>>
where
    P: WeatherProvider + ?Sized,
{
    let city = city.trim();
    if city.is_empty() {
        debug!("Blank city name, nothing to rank");
        return Ok(None);
    }

    let Some(location) = provider.search_location(city).await?.into_iter().next() else {
        info!("No location found");
        return Ok(None);
    };

    info!(
        location = %location.name,
        country = %location.country_code,
        lat = location.latitude,
        lon = location.longitude,
        "Location resolved"
    );

    let request = ForecastRequest::for_location(&location, days)?;
    let forecast = provider.get_forecast(&request).await?;

    let daily = score_daily_forecast(&forecast)?;
    let overall = aggregate_scores(&daily);

    Ok(Some(CityRanking {
        location,
        overall,
        daily,
        generated_at: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::DailyObservations;
    use crate::services::weather_api::{Location, ProviderError};
    use std::sync::Mutex;

    struct StubProvider {
        locations: Vec<Location>,
        forecast: DailyObservations,
        searched: Mutex<Vec<String>>,
        requested: Mutex<Vec<ForecastRequest>>,
    }

    impl StubProvider {
        fn new(locations: Vec<Location>, forecast: DailyObservations) -> Self {
            Self {
                locations,
                forecast,
                searched: Mutex::new(Vec::new()),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl WeatherProvider for StubProvider {
        async fn search_location(&self, name: &str) -> Result<Vec<Location>, ProviderError> {
            self.searched.lock().unwrap().push(name.to_string());
            Ok(self.locations.clone())
        }

        async fn get_forecast(
            &self,
            request: &ForecastRequest,
        ) -> Result<DailyObservations, ProviderError> {
            self.requested.lock().unwrap().push(request.clone());
            Ok(self.forecast.clone())
        }
    }

    fn location(id: i64, name: &str, latitude: f64, longitude: f64) -> Location {
        Location {
            id,
            name: name.to_string(),
            latitude,
            longitude,
            timezone: "Europe/Zurich".to_string(),
            country_code: "CH".to_string(),
            country: "Switzerland".to_string(),
            admin1: None,
        }
    }

    fn snowy_day() -> DailyObservations {
        DailyObservations {
            date: vec!["2026-01-10".to_string()],
            temperature_max: vec![Some(-2.0)],
            temperature_min: vec![Some(-6.0)],
            precipitation_sum: vec![Some(0.0)],
            snowfall_sum: vec![Some(5.0)],
            precipitation_probability_max: vec![Some(10.0)],
            weather_code: vec![Some(71.0)],
            wind_speed_max: vec![Some(5.0)],
        }
    }

    #[tokio::test]
    async fn test_blank_city_skips_provider() {
        let provider = StubProvider::new(vec![location(1, "Zermatt", 46.0, 7.7)], snowy_day());

        let ranking = rank_city(&provider, "   ", 7).await.unwrap();

        assert!(ranking.is_none());
        assert!(provider.searched.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_candidates_is_none() {
        let provider = StubProvider::new(vec![], snowy_day());

        let ranking = rank_city(&provider, "Atlantis", 7).await.unwrap();

        assert!(ranking.is_none());
        assert!(provider.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_first_candidate_is_ranked() {
        let provider = StubProvider::new(
            vec![
                location(2657928, "Zermatt", 46.02, 7.75),
                location(42, "Zermatt Village", 10.0, 10.0),
            ],
            snowy_day(),
        );

        let ranking = rank_city(&provider, "  Zermatt ", 7).await.unwrap().unwrap();

        assert_eq!(*provider.searched.lock().unwrap(), vec!["Zermatt".to_string()]);
        let requested = provider.requested.lock().unwrap();
        assert_eq!(requested.len(), 1);
        assert_eq!(requested[0].latitude, 46.02);
        assert_eq!(requested[0].timezone, "Europe/Zurich");
        assert_eq!(requested[0].days, 7);

        assert_eq!(ranking.location.id, 2657928);
        assert_eq!(ranking.daily.len(), 1);
        assert_eq!(ranking.daily[0].skiing, 90);
        assert_eq!(ranking.overall.skiing, 90);
        assert_eq!(ranking.overall.outdoor_sightseeing, 40);
    }

    #[tokio::test]
    async fn test_invalid_day_count_is_an_error() {
        let provider = StubProvider::new(vec![location(1, "Zermatt", 46.0, 7.7)], snowy_day());

        assert!(rank_city(&provider, "Zermatt", -1).await.is_err());
        assert!(provider.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_misaligned_forecast_is_an_error() {
        let mut forecast = snowy_day();
        forecast.weather_code.clear();
        let provider = StubProvider::new(vec![location(1, "Zermatt", 46.0, 7.7)], forecast);

        let err = rank_city(&provider, "Zermatt", 7).await.unwrap_err();

        assert!(err.to_string().contains("weather_code"));
    }
}
