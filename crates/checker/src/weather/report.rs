//! Assembling the display-ready weather report
//!
//! Combines the resolved place, both unit datasets, and the code table
//! into the structure the templates render. All upstream failures are
//! coarsened here to the two user-visible outcomes.

use log::warn;

use crate::weather::codes::condition_for;
use crate::weather::forecast::{ForecastError, UnitReadings, WeatherFetcher, FORECAST_DAYS};
use crate::weather::geocode::{CityResolver, ResolvedPlace};

/// One forecast day, display-ready
#[derive(Debug, Clone, PartialEq)]
pub struct DailyOutlook {
    pub date: String,
    pub condition: &'static str,
    pub icon: &'static str,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub temp_min_f: f64,
    pub temp_max_f: f64,
}

/// The assembled result handed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub place: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub windspeed: f64,
    pub winddir: f64,
    pub condition: &'static str,
    pub icon: &'static str,
    pub forecast: Vec<DailyOutlook>,
}

/// The only failures the presentation layer ever sees
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    #[error("Could not find that city.")]
    CityNotFound,
    #[error("Weather data unavailable.")]
    WeatherUnavailable,
}

/// Build a report from validated per-unit datasets.
///
/// Both datasets must cover `FORECAST_DAYS` days in every daily array;
/// shorter data is rejected instead of indexed past the end.
pub fn assemble(
    place: &ResolvedPlace,
    celsius: &UnitReadings,
    fahrenheit: &UnitReadings,
) -> Result<WeatherReport, ForecastError> {
    for readings in [celsius, fahrenheit] {
        let got = readings.daily.complete_days();
        if got < FORECAST_DAYS {
            return Err(ForecastError::ShortDaily {
                expected: FORECAST_DAYS,
                got,
            });
        }
    }

    let forecast = (0..FORECAST_DAYS)
        .map(|i| {
            // Each day gets its own code lookup
            let cond = condition_for(celsius.daily.weathercode[i]);
            DailyOutlook {
                date: celsius.daily.time[i].clone(),
                condition: cond.description,
                icon: cond.icon,
                temp_min_c: celsius.daily.temperature_2m_min[i],
                temp_max_c: celsius.daily.temperature_2m_max[i],
                temp_min_f: fahrenheit.daily.temperature_2m_min[i],
                temp_max_f: fahrenheit.daily.temperature_2m_max[i],
            }
        })
        .collect();

    let cond = condition_for(celsius.current.weathercode);

    Ok(WeatherReport {
        place: place.display_name.clone(),
        temp_c: celsius.current.temperature,
        temp_f: fahrenheit.current.temperature,
        windspeed: celsius.current.windspeed,
        winddir: celsius.current.winddirection,
        condition: cond.description,
        icon: cond.icon,
        forecast,
    })
}

/// One lookup per form submission: resolve, fetch, assemble
pub struct WeatherService {
    resolver: CityResolver,
    fetcher: WeatherFetcher,
}

impl WeatherService {
    pub fn new(resolver: CityResolver, fetcher: WeatherFetcher) -> Self {
        Self { resolver, fetcher }
    }

    pub async fn report_for(&self, city: &str) -> Result<WeatherReport, ReportError> {
        let Some(place) = self.resolver.resolve(city).await else {
            return Err(ReportError::CityNotFound);
        };

        let (celsius, fahrenheit) = self
            .fetcher
            .fetch_both(place.latitude, place.longitude)
            .await
            .map_err(|e| {
                warn!("weather fetch failed for {}: {}", place.display_name, e);
                ReportError::WeatherUnavailable
            })?;

        assemble(&place, &celsius, &fahrenheit).map_err(|e| {
            warn!("report assembly failed for {}: {}", place.display_name, e);
            ReportError::WeatherUnavailable
        })
    }
}
