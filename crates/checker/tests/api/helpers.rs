use async_trait::async_trait;
use axum::Router;
use checker::{
    app, AppState, CityResolver, ForecastError, ForecastResponse, ForecastService, GeocodeError,
    GeocodeService, Place, TemperatureUnit, WeatherFetcher, WeatherService,
};
use mockall::mock;
use std::sync::Arc;

mock! {
    pub GeocodeClient {}

    #[async_trait]
    impl GeocodeService for GeocodeClient {
        async fn search(&self, city: &str) -> Result<Option<Place>, GeocodeError>;
    }
}

mock! {
    pub ForecastClient {}

    #[async_trait]
    impl ForecastService for ForecastClient {
        async fn fetch(
            &self,
            latitude: f64,
            longitude: f64,
            unit: TemperatureUnit,
        ) -> Result<ForecastResponse, ForecastError>;
    }
}

pub struct TestApp {
    pub app: Router,
}

/// Build the real router over mocked upstream services
pub fn spawn_app(
    primary: MockGeocodeClient,
    fallback: MockGeocodeClient,
    forecast: MockForecastClient,
) -> TestApp {
    let resolver = CityResolver::new(Arc::new(primary), Arc::new(fallback));
    let fetcher = WeatherFetcher::new(Arc::new(forecast));
    let state = AppState {
        service: Arc::new(WeatherService::new(resolver, fetcher)),
    };

    TestApp { app: app(state) }
}

pub fn paris() -> Place {
    Place {
        latitude: 48.8566,
        longitude: 2.3522,
        label: Some("Paris, France".to_string()),
    }
}

/// A complete Open-Meteo payload with `days` forecast days and the given
/// current weather code
pub fn open_meteo_payload(current_code: i32, days: usize) -> ForecastResponse {
    let time: Vec<String> = (1..=days).map(|d| format!("2026-09-{:02}", d)).collect();
    let temperature_2m_max: Vec<f64> = (0..days).map(|d| 20.0 + d as f64).collect();
    let temperature_2m_min: Vec<f64> = (0..days).map(|d| 10.0 + d as f64).collect();
    let weathercode: Vec<i32> = vec![current_code; days];

    serde_json::from_value(serde_json::json!({
        "current_weather": {
            "temperature": 18.2,
            "windspeed": 11.5,
            "winddirection": 230.0,
            "weathercode": current_code
        },
        "daily": {
            "time": time,
            "temperature_2m_max": temperature_2m_max,
            "temperature_2m_min": temperature_2m_min,
            "weathercode": weathercode
        }
    }))
    .expect("payload should deserialize")
}
