//! Core library for the weather widget.
//!
//! This crate defines:
//! - The widget controller and the view boundary it renders through
//! - The OpenWeather request/response mapping over an injectable HTTP client
//! - Daily forecast selection
//! - Recent-search history over an injectable key-value store
//! - Configuration handling
//!
//! It is used by `weather-widget`, but any front-end that implements [`View`]
//! can drive it.

pub mod config;
pub mod controller;
pub mod error;
pub mod forecast;
pub mod history;
pub mod model;
pub mod provider;
pub mod render;
pub mod store;
pub mod view;

pub use config::Config;
pub use controller::{WeatherWidget, WidgetOptions, WidgetState};
pub use error::{HttpError, StoreError, WidgetError};
pub use forecast::ForecastSelection;
pub use history::{RecentSearches, SearchHistory};
pub use model::{CurrentWeatherReading, ForecastEntry, Query};
pub use provider::{HttpClient, HttpResponse, ReqwestClient, openweather::OpenWeatherApi};
pub use render::HtmlView;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use view::{ForecastCard, UiEvent, View, WeatherCard};
