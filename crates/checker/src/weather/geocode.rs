//! Geocoding: convert a free-text city name to coordinates
//!
//! Nominatim (OpenStreetMap) is queried first; the Open-Meteo geocoder is
//! the fallback when Nominatim fails or has no match. Both services are
//! free and need no API key, but Nominatim's usage policy requires a
//! descriptive User-Agent.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const OPEN_METEO_GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const USER_AGENT: &str = "WeatherChecker/2.0 (example@example.com)";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// A single geocoder match before display-name defaulting
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable label, when the service provides one
    pub label: Option<String>,
}

/// Coordinates handed to the weather fetch, with a label that is always set
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

#[derive(thiserror::Error, Debug)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("geocoding response was malformed: {0}")]
    Malformed(String),
}

/// One geocoding backend
#[async_trait]
pub trait GeocodeService: Send + Sync {
    /// Look up the best match for a free-text place name.
    ///
    /// `Ok(None)` means the service answered but found nothing; errors mean
    /// the call itself failed (transport, timeout, or an unusable payload).
    async fn search(&self, city: &str) -> Result<Option<Place>, GeocodeError>;
}

#[derive(Debug, Deserialize)]
struct NominatimHit {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

/// Primary geocoder: Nominatim search endpoint
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: Client,
}

impl NominatimClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl GeocodeService for NominatimClient {
    async fn search(&self, city: &str) -> Result<Option<Place>, GeocodeError> {
        let hits: Vec<NominatimHit> = self
            .http
            .get(NOMINATIM_URL)
            .query(&[("q", city), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .json()
            .await?;

        let Some(hit) = hits.into_iter().next() else {
            return Ok(None);
        };

        // Nominatim returns coordinates as strings
        let latitude: f64 = hit
            .lat
            .parse()
            .map_err(|_| GeocodeError::Malformed(format!("latitude {:?} is not a number", hit.lat)))?;
        let longitude: f64 = hit
            .lon
            .parse()
            .map_err(|_| GeocodeError::Malformed(format!("longitude {:?} is not a number", hit.lon)))?;

        Ok(Some(Place {
            latitude,
            longitude,
            label: hit.display_name,
        }))
    }
}

#[derive(Debug, Deserialize)]
struct OpenMeteoGeocodeHit {
    latitude: f64,
    longitude: f64,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoGeocodeResponse {
    results: Option<Vec<OpenMeteoGeocodeHit>>,
}

/// Fallback geocoder: Open-Meteo search endpoint
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocodeClient {
    http: Client,
}

impl OpenMeteoGeocodeClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl GeocodeService for OpenMeteoGeocodeClient {
    async fn search(&self, city: &str) -> Result<Option<Place>, GeocodeError> {
        let body: OpenMeteoGeocodeResponse = self
            .http
            .get(OPEN_METEO_GEOCODE_URL)
            .query(&[("name", city), ("count", "1")])
            .send()
            .await?
            .json()
            .await?;

        let hit = body.results.and_then(|results| results.into_iter().next());

        Ok(hit.map(|hit| Place {
            latitude: hit.latitude,
            longitude: hit.longitude,
            label: hit.name,
        }))
    }
}

/// Primary-then-fallback coordinate resolution
pub struct CityResolver {
    primary: Arc<dyn GeocodeService>,
    fallback: Arc<dyn GeocodeService>,
}

impl CityResolver {
    pub fn new(primary: Arc<dyn GeocodeService>, fallback: Arc<dyn GeocodeService>) -> Self {
        Self { primary, fallback }
    }

    /// Resolve a city name to coordinates, or `None` when neither service
    /// has a match. Primary failures are logged and never propagated; the
    /// fallback only runs when the primary yields nothing.
    pub async fn resolve(&self, city: &str) -> Option<ResolvedPlace> {
        match self.primary.search(city).await {
            Ok(Some(place)) => return Some(Self::with_display_name(place, city)),
            Ok(None) => info!("primary geocoder had no match for {:?}", city),
            Err(e) => warn!("primary geocoder failed for {:?}: {}", city, e),
        }

        match self.fallback.search(city).await {
            Ok(Some(place)) => Some(Self::with_display_name(place, city)),
            Ok(None) => None,
            Err(e) => {
                warn!("fallback geocoder failed for {:?}: {}", city, e);
                None
            }
        }
    }

    fn with_display_name(place: Place, city: &str) -> ResolvedPlace {
        ResolvedPlace {
            latitude: place.latitude,
            longitude: place.longitude,
            display_name: place.label.unwrap_or_else(|| city.to_string()),
        }
    }
}
