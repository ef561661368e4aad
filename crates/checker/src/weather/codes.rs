//! WMO weather interpretation codes
//!
//! Open-Meteo reports conditions as the small integer codes defined by the
//! WMO; this table maps each code the app understands to a description and
//! a Unicode icon.

/// Display data for one weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub description: &'static str,
    pub icon: &'static str,
}

const fn condition(description: &'static str, icon: &'static str) -> Condition {
    Condition { description, icon }
}

/// Shown for any code missing from the table, so lookup is total
pub const UNKNOWN_CONDITION: Condition = condition("Unknown", "❓");

/// Map a weather code to its description and icon
pub fn condition_for(code: i32) -> Condition {
    match code {
        0 => condition("Clear sky", "☀️"),
        1 => condition("Mainly clear", "🌤"),
        2 => condition("Partly cloudy", "⛅"),
        3 => condition("Overcast", "☁️"),
        45 => condition("Fog", "🌫"),
        48 => condition("Rime fog", "🌫"),
        51 => condition("Light drizzle", "🌦"),
        53 => condition("Moderate drizzle", "🌦"),
        55 => condition("Dense drizzle", "🌧"),
        61 => condition("Slight rain", "🌧"),
        63 => condition("Moderate rain", "🌧"),
        65 => condition("Heavy rain", "🌧"),
        71 => condition("Slight snow", "🌨"),
        73 => condition("Moderate snow", "🌨"),
        75 => condition("Heavy snow", "❄️"),
        80 => condition("Slight rain showers", "🌦"),
        81 => condition("Moderate rain showers", "🌦"),
        82 => condition("Violent rain showers", "⛈"),
        95 => condition("Thunderstorm", "⛈"),
        96 => condition("Thunderstorm w/ hail", "⛈"),
        99 => condition("Severe thunderstorm w/ hail", "⛈"),
        _ => UNKNOWN_CONDITION,
    }
}
