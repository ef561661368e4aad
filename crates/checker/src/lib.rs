//! Weather Checker web application
//!
//! A single-page form that geocodes a city name (Nominatim first,
//! Open-Meteo geocoding as the fallback), fetches the Open-Meteo forecast
//! in both Celsius and Fahrenheit, and renders current conditions plus a
//! 7-day outlook.

mod routes;
mod startup;
mod templates;
mod utils;
mod weather;

pub use routes::*;
pub use startup::{app, build_app_state, AppState};
pub use templates::home_page;
pub use utils::{get_config_info, get_log_level, setup_logger, Cli};
pub use weather::*;
