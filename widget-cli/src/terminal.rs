use weather_widget_core::{ForecastCard, View, WeatherCard};

/// Prints the widget to stdout as it changes.
#[derive(Debug, Default)]
pub struct TerminalView;

impl View for TerminalView {
    fn show_welcome(&mut self, message: &str) {
        println!("{message}");
    }

    fn render_weather(&mut self, card: &WeatherCard) {
        println!();
        println!("{}", card.title);
        println!("  {}°C, {}", card.temperature_c, card.description);
        println!("  Wind: {} m/s", card.wind_speed_mps);
        if let Some(url) = &card.icon_url {
            println!("  Icon: {url}");
        }
    }

    fn clear_weather(&mut self) {}

    fn render_forecast(&mut self, cards: &[ForecastCard]) {
        if cards.is_empty() {
            return;
        }
        println!();
        println!("Forecast:");
        for card in cards {
            println!(
                "  {:<4} {:>6}°C  {}",
                card.day, card.temperature_c, card.description
            );
        }
    }

    fn clear_forecast(&mut self) {}

    fn set_error(&mut self, message: &str) {
        println!("Error: {message}");
    }

    fn clear_error(&mut self) {}

    fn set_loading(&mut self, visible: bool) {
        if visible {
            println!("Loading...");
        }
    }

    // Input is not read while a search is in flight.
    fn set_search_enabled(&mut self, _enabled: bool) {}

    fn render_recent_searches(&mut self, cities: &[String]) {
        if cities.is_empty() {
            println!("No recent searches.");
        } else {
            println!("Recent: {}", cities.join(", "));
        }
    }
}
