//! HTML rendition of the widget.
//!
//! [`HtmlView`] keeps the view-models it was handed and turns them into
//! markup on demand. Every provider- or user-supplied string is escaped.

use std::fmt::Write as _;

use crate::view::{ForecastCard, View, WeatherCard};

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn weather_card_html(card: &WeatherCard) -> String {
    let mut html = String::from("<div class=\"weather-card\">");
    let _ = write!(html, "<h2>{}</h2>", escape_html(&card.title));
    if let Some(url) = &card.icon_url {
        let _ = write!(html, "<img src=\"{}\" alt=\"weather icon\">", escape_html(url));
    }
    let _ = write!(
        html,
        "<p class=\"temp\">{}°C</p><p>{}</p><p class=\"wind\">Wind: {} m/s</p></div>",
        card.temperature_c,
        escape_html(&card.description),
        card.wind_speed_mps,
    );
    html
}

pub fn forecast_card_html(card: &ForecastCard) -> String {
    let mut html = String::from("<div class=\"forecast-card\">");
    let _ = write!(html, "<h4>{}</h4>", escape_html(&card.day));
    if let Some(url) = &card.icon_url {
        let _ = write!(html, "<img src=\"{}\" alt=\"icon\">", escape_html(url));
    }
    let _ = write!(
        html,
        "<p>{}°C</p><p>{}</p></div>",
        card.temperature_c,
        escape_html(&card.description),
    );
    html
}

/// A [`View`] whose containers hold view-models instead of a live surface.
///
/// Useful for static HTML output and as a headless stand-in for a screen.
#[derive(Debug, Clone)]
pub struct HtmlView {
    welcome: Option<String>,
    weather: Option<WeatherCard>,
    forecast: Vec<ForecastCard>,
    error: String,
    loading: bool,
    search_enabled: bool,
    recent: Vec<String>,
}

impl Default for HtmlView {
    fn default() -> Self {
        Self {
            welcome: None,
            weather: None,
            forecast: Vec::new(),
            error: String::new(),
            loading: false,
            search_enabled: true,
            recent: Vec::new(),
        }
    }
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weather(&self) -> Option<&WeatherCard> {
        self.weather.as_ref()
    }

    pub fn forecast(&self) -> &[ForecastCard] {
        &self.forecast
    }

    pub fn error_text(&self) -> &str {
        &self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_search_enabled(&self) -> bool {
        self.search_enabled
    }

    pub fn recent_searches(&self) -> &[String] {
        &self.recent
    }

    /// Contents of the weather container: the card, else the welcome message.
    pub fn weather_html(&self) -> String {
        match (&self.weather, &self.welcome) {
            (Some(card), _) => weather_card_html(card),
            (None, Some(welcome)) => format!("<h2>{}</h2>", escape_html(welcome)),
            (None, None) => String::new(),
        }
    }

    pub fn forecast_html(&self) -> String {
        self.forecast.iter().map(forecast_card_html).collect()
    }

    pub fn recent_html(&self) -> String {
        self.recent
            .iter()
            .map(|city| {
                let city = escape_html(city);
                format!("<button class=\"recent-search\" data-city=\"{city}\">{city}</button>")
            })
            .collect()
    }
}

impl View for HtmlView {
    fn show_welcome(&mut self, message: &str) {
        self.weather = None;
        self.welcome = Some(message.to_string());
    }

    fn render_weather(&mut self, card: &WeatherCard) {
        self.welcome = None;
        self.weather = Some(card.clone());
    }

    fn clear_weather(&mut self) {
        self.welcome = None;
        self.weather = None;
    }

    fn render_forecast(&mut self, cards: &[ForecastCard]) {
        self.forecast = cards.to_vec();
    }

    fn clear_forecast(&mut self) {
        self.forecast.clear();
    }

    fn set_error(&mut self, message: &str) {
        self.error = message.to_string();
    }

    fn clear_error(&mut self) {
        self.error.clear();
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn set_search_enabled(&mut self, enabled: bool) {
        self.search_enabled = enabled;
    }

    fn render_recent_searches(&mut self, cities: &[String]) {
        self.recent = cities.to_vec();
    }
}
