use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// A city name typed by the user, trimmed and known to be non-empty.
///
/// Case is left untouched; the provider resolves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn parse(input: &str) -> Result<Self, WidgetError> {
        let city = input.trim();
        if city.is_empty() {
            return Err(WidgetError::EmptyQuery);
        }
        Ok(Self(city.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Current conditions for one location, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherReading {
    pub name: String,
    pub country: Option<String>,
    pub temperature_c: f64,
    pub description: String,
    pub icon: String,
    pub wind_speed_mps: f64,
}

/// One 3-hour slot of the 5-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Provider timestamp, e.g. `2024-01-15 12:00:00`.
    pub timestamp: String,
    pub temperature_c: f64,
    pub description: String,
    pub icon: String,
}
