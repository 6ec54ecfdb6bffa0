use async_trait::async_trait;
use reqwest::{Method, Request, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::fetch::auth::UrlParam;
use crate::fetch::{BasicClient, HttpClient};
use crate::forecast::{DailyObservations, ForecastResponse};
use crate::services::weather_api::{ForecastRequest, Location, ProviderError, WeatherProvider};

/// Daily variables requested from the forecast endpoint, in wire order.
const DAILY_VARIABLES: &[&str] = &[
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_sum",
    "snowfall_sum",
    "precipitation_probability_max",
    "weather_code",
    "wind_speed_10m_max",
];

/// How many geocoding candidates to ask for.
const SEARCH_RESULT_COUNT: &str = "5";

#[derive(Deserialize)]
struct GeocodingResponse {
    // omitted entirely when nothing matches
    #[serde(default)]
    results: Vec<Location>,
}

/// [`WeatherProvider`] backed by the Open-Meteo geocoding and forecast APIs.
pub struct OpenMeteoClient<C> {
    client: C,
    geocoding_url: String,
    forecast_url: String,
}

impl<C: HttpClient> OpenMeteoClient<C> {
    pub fn new(client: C, geocoding_url: impl Into<String>, forecast_url: impl Into<String>) -> Self {
        Self {
            client,
            geocoding_url: geocoding_url.into(),
            forecast_url: forecast_url.into(),
        }
    }

    fn endpoint(base: &str, params: &[(&str, String)]) -> Result<Url, ProviderError> {
        Url::parse_with_params(base, params)
            .map_err(|e| ProviderError::InvalidUrl(format!("{base}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ProviderError> {
        debug!(url = %url, "Requesting Open-Meteo");

        let response = self.client.execute(Request::new(Method::GET, url)).await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl OpenMeteoClient<Box<dyn HttpClient>> {
    /// Builds a client from runtime config, adding the `apikey` parameter when
    /// a key is configured.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        let basic = BasicClient::with_timeouts(Duration::from_secs(30), Duration::from_secs(10))?;

        let client: Box<dyn HttpClient> = match &config.api_key {
            Some(key) => Box::new(UrlParam::open_meteo(basic, key.clone())),
            None => Box::new(basic),
        };

        Ok(Self::new(
            client,
            config.geocoding_url.clone(),
            config.forecast_url.clone(),
        ))
    }
}

#[async_trait]
impl<C: HttpClient> WeatherProvider for OpenMeteoClient<C> {
    #[tracing::instrument(skip(self))]
    async fn search_location(&self, name: &str) -> Result<Vec<Location>, ProviderError> {
        let url = Self::endpoint(
            &self.geocoding_url,
            &[
                ("name", name.to_string()),
                ("count", SEARCH_RESULT_COUNT.to_string()),
            ],
        )?;

        let response: GeocodingResponse = self.get_json(url).await?;
        debug!(candidates = response.results.len(), "Geocoding finished");

        Ok(response.results)
    }

    #[tracing::instrument(
        skip(self, request),
        fields(lat = request.latitude, lon = request.longitude, days = request.days)
    )]
    async fn get_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<DailyObservations, ProviderError> {
        let url = Self::endpoint(
            &self.forecast_url,
            &[
                ("latitude", request.latitude.to_string()),
                ("longitude", request.longitude.to_string()),
                ("timezone", request.timezone.clone()),
                ("forecast_days", request.days.to_string()),
                ("daily", DAILY_VARIABLES.join(",")),
            ],
        )?;

        let response: ForecastResponse = self.get_json(url).await?;

        if response.daily.len() != usize::from(request.days) {
            warn!(
                requested = request.days,
                returned = response.daily.len(),
                "Forecast horizon differs from request"
            );
        }

        Ok(response.daily)
    }
}
