use crate::helpers::{open_meteo_payload, paris, spawn_app, MockForecastClient, MockGeocodeClient};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
};
use checker::{GeocodeError, Place, TemperatureUnit};
use tower::ServiceExt;

async fn submit_city(test_app: &crate::helpers::TestApp, city: &str) -> (u16, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("city={}", city)))
        .unwrap();

    let response = test_app
        .app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request.");

    let status = response.status().as_u16();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// The landing page renders the search form with no report
#[tokio::test]
async fn landing_page_shows_the_form() {
    let test_app = spawn_app(
        MockGeocodeClient::new(),
        MockGeocodeClient::new(),
        MockForecastClient::new(),
    );

    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = test_app
        .app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("name=\"city\""));
    assert!(html.contains("Check Weather"));
}

/// Paris resolves via the primary geocoder; the fallback is never queried
/// and weather code 3 renders as Overcast
#[tokio::test]
async fn known_city_renders_a_full_report() {
    let mut primary = MockGeocodeClient::new();
    primary
        .expect_search()
        .withf(|city| city == "Paris")
        .times(1)
        .returning(|_| Ok(Some(paris())));

    let mut fallback = MockGeocodeClient::new();
    fallback.expect_search().times(0);

    let mut forecast = MockForecastClient::new();
    forecast
        .expect_fetch()
        .withf(|lat, lon, unit| {
            *lat == 48.8566 && *lon == 2.3522 && *unit == TemperatureUnit::Celsius
        })
        .times(1)
        .returning(|_, _, _| Ok(open_meteo_payload(3, 7)));
    forecast
        .expect_fetch()
        .withf(|_, _, unit| *unit == TemperatureUnit::Fahrenheit)
        .times(1)
        .returning(|_, _, _| Ok(open_meteo_payload(3, 7)));

    let test_app = spawn_app(primary, fallback, forecast);
    let (status, html) = submit_city(&test_app, "Paris").await;

    assert_eq!(status, 200);
    assert!(html.contains("Paris, France"));
    assert!(html.contains("Overcast"));
    assert!(html.contains("☁️"));
    assert!(html.contains("7-Day Forecast"));
    // All seven forecast days are rendered
    for day in 1..=7 {
        assert!(html.contains(&format!("2026-09-{:02}", day)), "day {day}");
    }
}

/// Neither geocoder has a match; the not-found notice is rendered and no
/// weather call is made
#[tokio::test]
async fn unknown_city_shows_not_found() {
    let mut primary = MockGeocodeClient::new();
    primary.expect_search().times(1).returning(|_| Ok(None));

    let mut fallback = MockGeocodeClient::new();
    fallback.expect_search().times(1).returning(|_| Ok(None));

    let mut forecast = MockForecastClient::new();
    forecast.expect_fetch().times(0);

    let test_app = spawn_app(primary, fallback, forecast);
    let (status, html) = submit_city(&test_app, "Zzqqnotreal").await;

    assert_eq!(status, 200);
    assert!(html.contains("Could not find that city."));
    assert!(!html.contains("7-Day Forecast"));
}

/// A primary geocoder failure (e.g. timeout) falls through to the fallback
#[tokio::test]
async fn fallback_geocoder_rescues_a_primary_failure() {
    let mut primary = MockGeocodeClient::new();
    primary
        .expect_search()
        .times(1)
        .returning(|_| Err(GeocodeError::Malformed("primary timed out".to_string())));

    let mut fallback = MockGeocodeClient::new();
    fallback.expect_search().times(1).returning(|_| {
        Ok(Some(Place {
            latitude: 47.3769,
            longitude: 8.5417,
            label: None,
        }))
    });

    let mut forecast = MockForecastClient::new();
    forecast
        .expect_fetch()
        .withf(|lat, lon, _| *lat == 47.3769 && *lon == 8.5417)
        .times(2)
        .returning(|_, _, _| Ok(open_meteo_payload(0, 7)));

    let test_app = spawn_app(primary, fallback, forecast);
    let (status, html) = submit_city(&test_app, "Zurich").await;

    assert_eq!(status, 200);
    // The fallback hit had no label, so the submitted name is used
    assert!(html.contains("Zurich"));
    assert!(html.contains("Clear sky"));
}

/// One failed unit fetch makes the whole report unavailable
#[tokio::test]
async fn failed_unit_fetch_shows_unavailable() {
    let mut primary = MockGeocodeClient::new();
    primary
        .expect_search()
        .times(1)
        .returning(|_| Ok(Some(paris())));

    let fallback = MockGeocodeClient::new();

    let mut forecast = MockForecastClient::new();
    forecast
        .expect_fetch()
        .withf(|_, _, unit| *unit == TemperatureUnit::Celsius)
        .times(1)
        .returning(|_, _, _| Ok(open_meteo_payload(3, 7)));
    forecast
        .expect_fetch()
        .withf(|_, _, unit| *unit == TemperatureUnit::Fahrenheit)
        .times(1)
        .returning(|_, _, _| {
            let mut response = open_meteo_payload(3, 7);
            response.current_weather = None;
            Ok(response)
        });

    let test_app = spawn_app(primary, fallback, forecast);
    let (status, html) = submit_city(&test_app, "Paris").await;

    assert_eq!(status, 200);
    assert!(html.contains("Weather data unavailable."));
    assert!(!html.contains("7-Day Forecast"));
}

/// Daily arrays shorter than 7 days are rejected instead of indexed past
/// the end
#[tokio::test]
async fn short_daily_arrays_show_unavailable() {
    let mut primary = MockGeocodeClient::new();
    primary
        .expect_search()
        .times(1)
        .returning(|_| Ok(Some(paris())));

    let fallback = MockGeocodeClient::new();

    let mut forecast = MockForecastClient::new();
    forecast
        .expect_fetch()
        .times(2)
        .returning(|_, _, _| Ok(open_meteo_payload(3, 5)));

    let test_app = spawn_app(primary, fallback, forecast);
    let (status, html) = submit_city(&test_app, "Paris").await;

    assert_eq!(status, 200);
    assert!(html.contains("Weather data unavailable."));
}

/// An empty submission is passed through and reported as not found
#[tokio::test]
async fn empty_city_is_ordinary_not_found() {
    let mut primary = MockGeocodeClient::new();
    primary
        .expect_search()
        .withf(|city| city.is_empty())
        .times(1)
        .returning(|_| Ok(None));

    let mut fallback = MockGeocodeClient::new();
    fallback
        .expect_search()
        .withf(|city| city.is_empty())
        .times(1)
        .returning(|_| Ok(None));

    let test_app = spawn_app(primary, fallback, MockForecastClient::new());
    let (status, html) = submit_city(&test_app, "").await;

    assert_eq!(status, 200);
    assert!(html.contains("Could not find that city."));
}
