//! OpenWeatherMap current-weather client

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::WidgetConfig;
use crate::state::{Coordinates, WeatherSnapshot};

const KELVIN_OFFSET: f64 = 273.15;

/// Why a fetch did not produce a snapshot
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather service returned {0}")]
    Status(StatusCode),
    #[error("malformed weather payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("weather payload has no condition entry")]
    MissingCondition,
    /// The card was torn down before the response arrived
    #[error("weather request cancelled")]
    Cancelled,
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    name: String,
    weather: Vec<Condition>,
    main: Readings,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

/// Temperatures in Kelvin
#[derive(Debug, Deserialize)]
struct Readings {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
}

/// Kelvin to whole degrees Celsius. Halves round toward positive infinity.
pub fn kelvin_to_celsius(kelvin: f64) -> i32 {
    (kelvin - KELVIN_OFFSET + 0.5).floor() as i32
}

/// Display URL for an icon code such as `01d`
pub fn icon_url(icon_host: &str, code: &str) -> String {
    format!("{}/img/wn/{}@2x.png", icon_host.trim_end_matches('/'), code)
}

/// Turn a raw response body into a snapshot in one step
pub fn parse_snapshot(body: &str, icon_host: &str) -> Result<WeatherSnapshot, FetchError> {
    let payload: CurrentWeatherResponse = serde_json::from_str(body)?;
    let condition = payload
        .weather
        .into_iter()
        .next()
        .ok_or(FetchError::MissingCondition)?;

    Ok(WeatherSnapshot {
        city_name: payload.name,
        description: condition.description,
        temp: kelvin_to_celsius(payload.main.temp),
        temp_min: kelvin_to_celsius(payload.main.temp_min),
        temp_max: kelvin_to_celsius(payload.main.temp_max),
        icon_url: Some(icon_url(icon_host, &condition.icon)),
    })
}

// ============================================================================
// Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    config: WidgetConfig,
}

impl WeatherClient {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Fetch current conditions, giving up as soon as `cancel` fires
    pub async fn fetch_current(
        &self,
        coordinates: Coordinates,
        cancel: &CancellationToken,
    ) -> Result<WeatherSnapshot, FetchError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            result = self.request(coordinates) => result,
        }
    }

    async fn request(&self, coordinates: Coordinates) -> Result<WeatherSnapshot, FetchError> {
        let url = self.config.weather_url();
        debug!(%url, lat = coordinates.lat, lon = coordinates.lon, "requesting current weather");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", coordinates.lat.to_string()),
                ("lon", coordinates.lon.to_string()),
                ("appid", self.config.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        parse_snapshot(&body, &self.config.icon_host)
    }
}
