use serde::Deserialize;

use crate::{
    error::{HttpError, WidgetError},
    model::{CurrentWeatherReading, ForecastEntry},
};

use super::{HttpClient, HttpResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Current,
    Forecast,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Current => "weather",
            Endpoint::Forecast => "forecast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// `{icon}.png`, used on forecast cards.
    Small,
    /// `{icon}@2x.png`, used on the current-weather card.
    Large,
}

/// Builds OpenWeather requests for a base URL and API key.
#[derive(Debug, Clone)]
pub struct OpenWeatherApi {
    base_url: String,
    api_key: String,
}

impl OpenWeatherApi {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    pub fn query<'a>(&'a self, city: &'a str) -> [(&'static str, &'a str); 3] {
        [
            ("q", city),
            ("appid", self.api_key.as_str()),
            ("units", "metric"),
        ]
    }

    pub async fn get(
        &self,
        http: &dyn HttpClient,
        endpoint: Endpoint,
        city: &str,
    ) -> Result<HttpResponse, HttpError> {
        http.get(&self.url(endpoint), &self.query(city)).await
    }
}

pub fn icon_url(icon: &str, size: IconSize) -> Option<String> {
    if icon.is_empty() {
        return None;
    }
    Some(match size {
        IconSize::Small => format!("{ICON_BASE_URL}/{icon}.png"),
        IconSize::Large => format!("{ICON_BASE_URL}/{icon}@2x.png"),
    })
}

pub fn parse_current(body: &str) -> Result<CurrentWeatherReading, WidgetError> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|source| WidgetError::Parse {
            endpoint: Endpoint::Current.path(),
            source,
        })?;

    let (description, icon) = first_condition(parsed.weather);

    Ok(CurrentWeatherReading {
        name: parsed.name,
        country: parsed.sys.and_then(|sys| sys.country),
        temperature_c: parsed.main.temp,
        description,
        icon,
        wind_speed_mps: parsed.wind.speed,
    })
}

pub fn parse_forecast(body: &str) -> Result<Vec<ForecastEntry>, WidgetError> {
    let parsed: OwForecastResponse =
        serde_json::from_str(body).map_err(|source| WidgetError::Parse {
            endpoint: Endpoint::Forecast.path(),
            source,
        })?;

    Ok(parsed
        .list
        .into_iter()
        .map(|entry| {
            let (description, icon) = first_condition(entry.weather);
            ForecastEntry {
                timestamp: entry.dt_txt,
                temperature_c: entry.main.temp,
                description,
                icon,
            }
        })
        .collect())
}

fn first_condition(weather: Vec<OwWeather>) -> (String, String) {
    weather
        .into_iter()
        .next()
        .map(|w| (w.description, w.icon))
        .unwrap_or_else(|| ("Unknown".to_string(), String::new()))
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: Option<OwSys>,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}
