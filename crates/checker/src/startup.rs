use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use log::info;

use crate::{
    index_handler, lookup_handler, CityResolver, NominatimClient, OpenMeteoClient,
    OpenMeteoGeocodeClient, WeatherFetcher, WeatherService,
};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WeatherService>,
}

/// Wire the real upstream clients into the request pipeline
pub fn build_app_state() -> Result<AppState, anyhow::Error> {
    let primary = Arc::new(NominatimClient::new()?);
    let fallback = Arc::new(OpenMeteoGeocodeClient::new()?);
    let resolver = CityResolver::new(primary, fallback);

    let forecast = Arc::new(OpenMeteoClient::new()?);
    let fetcher = WeatherFetcher::new(forecast);

    Ok(AppState {
        service: Arc::new(WeatherService::new(resolver, fetcher)),
    })
}

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(lookup_handler))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    info!(
        target: "http_request",
        "{} {} -> {}",
        method,
        uri,
        response.status()
    );

    response
}
