//! The rendering boundary between the controller and a concrete front-end.

use crate::{
    forecast::{ForecastSelection, weekday_short},
    model::{CurrentWeatherReading, ForecastEntry},
    provider::openweather::{IconSize, icon_url},
};

/// View-model for the current-weather card.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCard {
    /// Location name, with the country code appended when known.
    pub title: String,
    pub icon_url: Option<String>,
    pub temperature_c: f64,
    pub description: String,
    pub wind_speed_mps: f64,
}

impl From<&CurrentWeatherReading> for WeatherCard {
    fn from(reading: &CurrentWeatherReading) -> Self {
        let title = match &reading.country {
            Some(country) if !country.is_empty() => format!("{}, {}", reading.name, country),
            _ => reading.name.clone(),
        };

        Self {
            title,
            icon_url: icon_url(&reading.icon, IconSize::Large),
            temperature_c: reading.temperature_c,
            description: reading.description.clone(),
            wind_speed_mps: reading.wind_speed_mps,
        }
    }
}

/// View-model for one day of the forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCard {
    /// Short weekday name, e.g. "Mon".
    pub day: String,
    pub icon_url: Option<String>,
    pub temperature_c: f64,
    pub description: String,
}

impl From<&ForecastEntry> for ForecastCard {
    fn from(entry: &ForecastEntry) -> Self {
        Self {
            day: weekday_short(&entry.timestamp),
            icon_url: icon_url(&entry.icon, IconSize::Small),
            temperature_c: entry.temperature_c,
            description: entry.description.clone(),
        }
    }
}

pub fn forecast_cards(selection: &ForecastSelection) -> Vec<ForecastCard> {
    selection.entries().iter().map(ForecastCard::from).collect()
}

/// Input events a front-end feeds back into the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Search button pressed (or Enter) with the current input text.
    Submit(String),
    /// A recent-search button was activated.
    RecentSelected(String),
    ClearHistory,
}

/// Everything the controller can do to the screen.
///
/// Implementations own their surface; the controller never sees markup.
pub trait View {
    fn show_welcome(&mut self, message: &str);

    /// Replaces the weather container with `card`.
    fn render_weather(&mut self, card: &WeatherCard);

    fn clear_weather(&mut self);

    /// Replaces the forecast container with one card per entry.
    fn render_forecast(&mut self, cards: &[ForecastCard]);

    fn clear_forecast(&mut self);

    fn set_error(&mut self, message: &str);

    fn clear_error(&mut self);

    fn set_loading(&mut self, visible: bool);

    fn set_search_enabled(&mut self, enabled: bool);

    /// Replaces the recent-search buttons, most recent first.
    fn render_recent_searches(&mut self, cities: &[String]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_card_appends_country() {
        let reading = CurrentWeatherReading {
            name: "Lisbon".into(),
            country: Some("PT".into()),
            temperature_c: 18.0,
            description: "clear sky".into(),
            icon: "01d".into(),
            wind_speed_mps: 2.5,
        };

        let card = WeatherCard::from(&reading);
        assert_eq!(card.title, "Lisbon, PT");
        assert_eq!(
            card.icon_url.as_deref(),
            Some("https://openweathermap.org/img/wn/01d@2x.png")
        );

        let card = WeatherCard::from(&CurrentWeatherReading {
            country: None,
            ..reading
        });
        assert_eq!(card.title, "Lisbon");
    }

    #[test]
    fn forecast_card_uses_weekday() {
        let card = ForecastCard::from(&ForecastEntry {
            timestamp: "2024-01-16 12:00:00".into(),
            temperature_c: 6.0,
            description: "snow".into(),
            icon: "13d".into(),
        });

        assert_eq!(card.day, "Tue");
        assert_eq!(
            card.icon_url.as_deref(),
            Some("https://openweathermap.org/img/wn/13d.png")
        );
    }
}
