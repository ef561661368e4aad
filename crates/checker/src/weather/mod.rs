pub mod codes;
pub mod forecast;
pub mod geocode;
pub mod report;

pub use codes::{condition_for, Condition, UNKNOWN_CONDITION};
pub use forecast::{
    CurrentWeather, DailySeries, ForecastError, ForecastResponse, ForecastService, OpenMeteoClient,
    TemperatureUnit, UnitReadings, WeatherFetcher, FORECAST_DAYS,
};
pub use geocode::{
    CityResolver, GeocodeError, GeocodeService, NominatimClient, OpenMeteoGeocodeClient, Place,
    ResolvedPlace,
};
pub use report::{assemble, DailyOutlook, ReportError, WeatherReport, WeatherService};
