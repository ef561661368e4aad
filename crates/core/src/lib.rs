//! Weather Checker Core Library
//!
//! Shared utilities for the web application:
//! - Configuration loading (XDG-compliant)
//! - Common constants

mod config;

pub use config::{find_config_file, load_config, ConfigSource};

/// Application name used for XDG paths
pub const APP_NAME: &str = "weather-checker";

/// Default port the web server listens on
pub const DEFAULT_PORT: u16 = 8080;
