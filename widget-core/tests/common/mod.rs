//! Shared fixtures for the controller tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use weather_widget_core::{HttpClient, HttpError, HttpResponse};

/// Current-weather body as returned by `/weather`.
pub fn current_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
        "main": { "temp": 11.5, "feels_like": 10.8, "humidity": 81 },
        "wind": { "speed": 4.12, "deg": 240 },
        "sys": { "country": "GB" },
        "name": name,
        "cod": 200
    })
}

/// Forecast body with eight 3-hour slots per day for `days` days from 2024-01-15.
pub fn forecast_body(days: u32) -> serde_json::Value {
    let list: Vec<_> = (0..days)
        .flat_map(|day| {
            (0..8).map(move |slot| {
                serde_json::json!({
                    "dt_txt": format!("2024-01-{:02} {:02}:00:00", 15 + day, slot * 3),
                    "main": { "temp": f64::from(day) + f64::from(slot) / 10.0 },
                    "weather": [{ "description": "overcast clouds", "icon": "04d" }]
                })
            })
        })
        .collect();

    serde_json::json!({ "cod": "200", "cnt": list.len(), "list": list })
}

/// Scripted [`HttpClient`] that answers by endpoint and records every call.
#[derive(Debug, Clone)]
pub struct FakeHttp {
    current: HttpResponse,
    forecast: HttpResponse,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl FakeHttp {
    pub fn ok(name: &str, days: u32) -> Self {
        Self {
            current: HttpResponse::new(200, current_body(name).to_string()),
            forecast: HttpResponse::new(200, forecast_body(days).to_string()),
            calls: Arc::default(),
        }
    }

    pub fn with_current(mut self, status: u16, body: &str) -> Self {
        self.current = HttpResponse::new(status, body);
        self
    }

    pub fn with_forecast(mut self, status: u16, body: &str) -> Self {
        self.forecast = HttpResponse::new(status, body);
        self
    }

    /// `(url, q)` of every request so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, endpoint: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(url, _)| url.ends_with(endpoint))
            .map(|(_, q)| q)
            .collect()
    }
}

#[async_trait]
impl HttpClient for FakeHttp {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, HttpError> {
        let q = query
            .iter()
            .find(|(k, _)| *k == "q")
            .map(|(_, v)| v.to_string())
            .unwrap_or_default();
        self.calls.lock().unwrap().push((url.to_string(), q));

        if url.ends_with("/forecast") {
            Ok(self.forecast.clone())
        } else {
            Ok(self.current.clone())
        }
    }
}

/// [`HttpClient`] whose every request fails in transit.
#[derive(Debug, Default)]
pub struct UnreachableHttp;

#[async_trait]
impl HttpClient for UnreachableHttp {
    async fn get(&self, url: &str, _query: &[(&str, &str)]) -> Result<HttpResponse, HttpError> {
        Err(HttpError::Send {
            url: url.to_string(),
            message: "connection refused".to_string(),
        })
    }
}
