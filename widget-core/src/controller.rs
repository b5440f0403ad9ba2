//! The weather widget controller.
//!
//! [`WeatherWidget`] owns the view, the HTTP capability and, when history is
//! enabled, the key-value store. Every operation runs to completion on the
//! caller's task; overlapping searches are not guarded and the last one to
//! finish wins.

use tracing::{debug, info, instrument, warn};

use crate::{
    error::WidgetError,
    forecast::ForecastSelection,
    history::SearchHistory,
    model::{CurrentWeatherReading, Query},
    provider::{
        HttpClient,
        openweather::{self, Endpoint, OpenWeatherApi},
    },
    store::KeyValueStore,
    view::{UiEvent, View, WeatherCard, forecast_cards},
};

pub const WELCOME_MESSAGE: &str = "Search for a city to see weather updates 🌤️";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Idle,
    Loading,
    Displayed,
    Error,
}

/// Which optional parts of the widget are switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetOptions {
    /// Request `/forecast` alongside `/weather`.
    pub forecast: bool,
    /// Track recent searches and restore the last city on startup.
    pub history: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            forecast: true,
            history: true,
        }
    }
}

#[derive(Debug)]
struct Loaded {
    reading: CurrentWeatherReading,
    forecast: Option<ForecastSelection>,
}

#[derive(Debug)]
pub struct WeatherWidget<V: View> {
    api: OpenWeatherApi,
    http: Box<dyn HttpClient>,
    view: V,
    forecast: bool,
    history: Option<SearchHistory>,
    state: WidgetState,
}

impl<V: View> WeatherWidget<V> {
    /// A widget that fetches current weather and the forecast, without history.
    pub fn new(api: OpenWeatherApi, http: Box<dyn HttpClient>, view: V) -> Self {
        Self {
            api,
            http,
            view,
            forecast: true,
            history: None,
            state: WidgetState::Idle,
        }
    }

    /// Whether `/forecast` is requested alongside `/weather`.
    pub fn with_forecast(mut self, enabled: bool) -> Self {
        self.forecast = enabled;
        self
    }

    /// Enables recent-search tracking backed by `store`.
    pub fn with_history(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.history = Some(SearchHistory::load(store));
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn recent_searches(&self) -> &[String] {
        self.history
            .as_ref()
            .map(SearchHistory::entries)
            .unwrap_or_default()
    }

    /// Shows the welcome message and, with history enabled, the stored recent
    /// searches followed by an automatic fetch of the last city.
    pub async fn init(&mut self) {
        self.view.show_welcome(WELCOME_MESSAGE);
        self.view.clear_forecast();

        if let Some(history) = &self.history {
            self.view.render_recent_searches(history.entries());
        }
        self.load_last_city().await;
    }

    /// Dispatches a front-end event.
    pub async fn handle(&mut self, event: UiEvent) -> Result<(), WidgetError> {
        match event {
            UiEvent::Submit(input) => self.submit_search(&input).await,
            UiEvent::RecentSelected(city) => self.fetch_weather(&city).await,
            UiEvent::ClearHistory => {
                self.clear_history();
                Ok(())
            }
        }
    }

    /// Validates the raw input and fetches it. An empty query is reported in
    /// the error slot and never reaches the network.
    pub async fn submit_search(&mut self, input: &str) -> Result<(), WidgetError> {
        match Query::parse(input) {
            Ok(query) => self.fetch_weather(query.as_str()).await,
            Err(err) => {
                self.show_error(&err);
                Err(err)
            }
        }
    }

    /// Fetches and renders weather for `city`.
    ///
    /// The error, if any, has already been shown when this returns.
    #[instrument(skip(self), fields(forecast = self.forecast))]
    pub async fn fetch_weather(&mut self, city: &str) -> Result<(), WidgetError> {
        self.state = WidgetState::Loading;
        self.view.set_loading(true);
        self.view.clear_error();
        self.view.set_search_enabled(false);

        let result = match self.load(city).await {
            Ok(loaded) => {
                self.display(loaded);
                Ok(())
            }
            Err(err) => {
                debug!(%err, "fetch failed");
                self.show_error(&err);
                Err(err)
            }
        };

        self.view.set_loading(false);
        self.view.set_search_enabled(true);
        result
    }

    /// Erases the stored history and empties the rendered list.
    pub fn clear_history(&mut self) {
        let Some(history) = &mut self.history else {
            return;
        };

        if let Err(err) = history.clear() {
            warn!(%err, "failed to erase stored history");
        }
        self.view.render_recent_searches(history.entries());
    }

    /// Fetches the stored last city, if there is one.
    pub async fn load_last_city(&mut self) {
        let Some(city) = self.history.as_ref().and_then(SearchHistory::last_city) else {
            return;
        };

        info!(%city, "restoring last city");
        // Failures are already on screen.
        let _ = self.fetch_weather(&city).await;
    }

    async fn load(&self, city: &str) -> Result<Loaded, WidgetError> {
        let http = self.http.as_ref();
        let current = self.api.get(http, Endpoint::Current, city);

        let (current, forecast) = if self.forecast {
            let forecast = self.api.get(http, Endpoint::Forecast, city);
            let (current, forecast) = tokio::join!(current, forecast);
            (current, Some(forecast))
        } else {
            (current.await, None)
        };

        let current = current?;
        let forecast = forecast.transpose()?;

        if let Some(failed) = [Some(&current), forecast.as_ref()]
            .into_iter()
            .flatten()
            .find(|res| !res.is_success())
        {
            return Err(WidgetError::NotFound {
                status: failed.status,
            });
        }

        let reading = openweather::parse_current(&current.body)?;
        let forecast = forecast
            .map(|res| openweather::parse_forecast(&res.body))
            .transpose()?
            .map(ForecastSelection::from_entries);

        Ok(Loaded { reading, forecast })
    }

    fn display(&mut self, loaded: Loaded) {
        let Loaded { reading, forecast } = loaded;

        info!(city = %reading.name, temp = reading.temperature_c, "weather loaded");
        self.view.render_weather(&WeatherCard::from(&reading));

        if let Some(selection) = &forecast {
            self.view.render_forecast(&forecast_cards(selection));
        }

        if let Some(history) = &mut self.history {
            if let Err(err) = history.record(&reading.name) {
                warn!(%err, "failed to persist recent searches");
            }
            self.view.render_recent_searches(history.entries());
        }

        self.state = WidgetState::Displayed;
    }

    fn show_error(&mut self, err: &WidgetError) {
        self.view.set_error(&err.to_string());
        self.view.clear_weather();
        self.view.clear_forecast();
        self.state = WidgetState::Error;
    }
}
