//! Open-Meteo forecast fetch
//!
//! The API returns one temperature unit per call, so a full report needs
//! two calls that differ only in the `temperature_unit` parameter. Request
//! construction is shared; the unit is an explicit argument.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Days of daily forecast a report carries
pub const FORECAST_DAYS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    /// Open-Meteo's default; the query parameter is omitted
    Celsius,
    Fahrenheit,
}

/// Current conditions block of a forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    pub weathercode: i32,
}

/// Daily arrays of a forecast response, index-aligned by day
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weathercode: Vec<i32>,
}

impl DailySeries {
    /// Days covered by every array; upstream promises alignment but the
    /// assembler never indexes past this.
    pub fn complete_days(&self) -> usize {
        self.time
            .len()
            .min(self.temperature_2m_max.len())
            .min(self.temperature_2m_min.len())
            .min(self.weathercode.len())
    }
}

/// Raw forecast payload; either block may be absent on upstream trouble
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: Option<CurrentWeather>,
    pub daily: Option<DailySeries>,
}

#[derive(thiserror::Error, Debug)]
pub enum ForecastError {
    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("weather response was missing the {0} block")]
    Missing(&'static str),
    #[error("daily forecast covers {got} days, expected at least {expected}")]
    ShortDaily { expected: usize, got: usize },
}

/// The upstream forecast API
#[async_trait]
pub trait ForecastService: Send + Sync {
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        unit: TemperatureUnit,
    ) -> Result<ForecastResponse, ForecastError>;
}

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
}

impl OpenMeteoClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl ForecastService for OpenMeteoClient {
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        unit: TemperatureUnit,
    ) -> Result<ForecastResponse, ForecastError> {
        let mut query: Vec<(&str, String)> = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("timezone", "auto".to_string()),
            (
                "daily",
                "temperature_2m_max,temperature_2m_min,weathercode".to_string(),
            ),
        ];
        if unit == TemperatureUnit::Fahrenheit {
            query.push(("temperature_unit", "fahrenheit".to_string()));
        }

        let response = self
            .http
            .get(OPEN_METEO_FORECAST_URL)
            .query(&query)
            .send()
            .await?
            .json()
            .await?;

        Ok(response)
    }
}

/// Forecast data for one unit after validation
#[derive(Debug, Clone)]
pub struct UnitReadings {
    pub current: CurrentWeather,
    pub daily: DailySeries,
}

/// Fetches the Celsius and Fahrenheit datasets for one location
pub struct WeatherFetcher {
    service: Arc<dyn ForecastService>,
}

impl WeatherFetcher {
    pub fn new(service: Arc<dyn ForecastService>) -> Self {
        Self { service }
    }

    /// Fetch both unit datasets. A failure of either call, or a response
    /// missing its current or daily block, fails the whole operation; a
    /// report is never assembled from one usable dataset.
    pub async fn fetch_both(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(UnitReadings, UnitReadings), ForecastError> {
        let celsius = self
            .fetch_unit(latitude, longitude, TemperatureUnit::Celsius)
            .await?;
        let fahrenheit = self
            .fetch_unit(latitude, longitude, TemperatureUnit::Fahrenheit)
            .await?;
        Ok((celsius, fahrenheit))
    }

    async fn fetch_unit(
        &self,
        latitude: f64,
        longitude: f64,
        unit: TemperatureUnit,
    ) -> Result<UnitReadings, ForecastError> {
        let response = self.service.fetch(latitude, longitude, unit).await?;
        let current = response
            .current_weather
            .ok_or(ForecastError::Missing("current_weather"))?;
        let daily = response.daily.ok_or(ForecastError::Missing("daily"))?;
        Ok(UnitReadings { current, daily })
    }
}
