//! Controller behaviour against scripted HTTP and an in-memory store.

mod common;

use common::{FakeHttp, UnreachableHttp};
use weather_widget_core::{
    HtmlView, KeyValueStore, MemoryStore, OpenWeatherApi, UiEvent, WeatherWidget, WidgetError,
    WidgetState,
    history::{LAST_CITY_KEY, RECENT_SEARCHES_KEY},
};

const BASE_URL: &str = "https://api.test/data/2.5";

fn widget(http: &FakeHttp) -> WeatherWidget<HtmlView> {
    WeatherWidget::new(
        OpenWeatherApi::new(BASE_URL, "test-key"),
        Box::new(http.clone()),
        HtmlView::new(),
    )
}

fn widget_with_history(http: &FakeHttp, store: &MemoryStore) -> WeatherWidget<HtmlView> {
    widget(http).with_history(Box::new(store.clone()))
}

// ============================================================================
// Search input
// ============================================================================

#[tokio::test]
async fn empty_query_shows_validation_and_skips_network() {
    let http = FakeHttp::ok("London", 6);
    let mut widget = widget(&http);

    for input in ["", "   ", "\t"] {
        let result = widget.handle(UiEvent::Submit(input.to_string())).await;

        assert!(matches!(result, Err(WidgetError::EmptyQuery)));
        assert_eq!(widget.view().error_text(), "Please enter a city name.");
        assert_eq!(widget.state(), WidgetState::Error);
    }
    assert!(http.calls().is_empty());
}

#[tokio::test]
async fn query_is_trimmed_and_sent_to_both_endpoints() {
    let http = FakeHttp::ok("London", 6);
    let mut widget = widget(&http);

    widget.submit_search("  london ").await.unwrap();

    assert_eq!(http.calls_to("/weather"), ["london"]);
    assert_eq!(http.calls_to("/forecast"), ["london"]);
}

// ============================================================================
// Successful fetch
// ============================================================================

#[tokio::test]
async fn success_renders_current_and_five_day_forecast() {
    let http = FakeHttp::ok("London", 6);
    let mut widget = widget(&http);

    widget.fetch_weather("London").await.unwrap();

    let view = widget.view();
    let card = view.weather().expect("weather card rendered");
    assert_eq!(card.title, "London, GB");
    assert_eq!(card.temperature_c, 11.5);
    assert_eq!(card.description, "light rain");

    let days: Vec<_> = view.forecast().iter().map(|c| c.day.as_str()).collect();
    assert_eq!(days, ["Mon", "Tue", "Wed", "Thu", "Fri"]);
    // noon slot (index 4) of the first day
    assert_eq!(view.forecast()[0].temperature_c, 0.4);

    assert_eq!(view.error_text(), "");
    assert!(!view.is_loading());
    assert!(view.is_search_enabled());
    assert_eq!(widget.state(), WidgetState::Displayed);
}

#[tokio::test]
async fn short_forecast_is_not_padded() {
    let http = FakeHttp::ok("Oslo", 2);
    let mut widget = widget(&http);

    widget.fetch_weather("Oslo").await.unwrap();

    assert_eq!(widget.view().forecast().len(), 2);
}

#[tokio::test]
async fn current_only_mode_makes_a_single_request() {
    let http = FakeHttp::ok("Lima", 6);
    let mut widget = widget(&http).with_forecast(false);

    widget.fetch_weather("Lima").await.unwrap();

    assert_eq!(http.calls().len(), 1);
    assert!(http.calls_to("/forecast").is_empty());
    assert!(widget.view().weather().is_some());
    assert!(widget.view().forecast().is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn not_found_clears_containers_and_hides_loading() {
    let http = FakeHttp::ok("London", 6);
    let mut widget = widget(&http);
    widget.fetch_weather("London").await.unwrap();

    let failing = http.clone().with_current(404, r#"{"cod":"404","message":"city not found"}"#);
    let mut widget = widget_from_view(&failing, widget.into_view());

    let result = widget.fetch_weather("Atlantis").await;

    assert!(matches!(result, Err(WidgetError::NotFound { status: 404 })));
    let view = widget.view();
    assert_eq!(view.error_text(), "City not found");
    assert_eq!(view.weather_html(), "");
    assert_eq!(view.forecast_html(), "");
    assert!(!view.is_loading());
    assert!(view.is_search_enabled());
    assert_eq!(widget.state(), WidgetState::Error);
}

fn widget_from_view(http: &FakeHttp, view: HtmlView) -> WeatherWidget<HtmlView> {
    WeatherWidget::new(
        OpenWeatherApi::new(BASE_URL, "test-key"),
        Box::new(http.clone()),
        view,
    )
}

#[tokio::test]
async fn forecast_failure_alone_fails_the_search() {
    let http = FakeHttp::ok("London", 6).with_forecast(500, "boom");
    let mut widget = widget(&http);

    let result = widget.fetch_weather("London").await;

    assert!(matches!(result, Err(WidgetError::NotFound { status: 500 })));
    assert_eq!(widget.view().error_text(), "City not found");
    assert!(widget.view().weather().is_none());
}

#[tokio::test]
async fn malformed_body_shows_parse_message() {
    let http = FakeHttp::ok("London", 6).with_current(200, "<html>not json</html>");
    let mut widget = widget(&http);

    let result = widget.fetch_weather("London").await;

    assert!(matches!(result, Err(WidgetError::Parse { .. })));
    assert!(
        widget
            .view()
            .error_text()
            .starts_with("Failed to parse OpenWeather weather response")
    );
}

#[tokio::test]
async fn transport_failure_shows_its_own_message() {
    let mut widget = WeatherWidget::new(
        OpenWeatherApi::new(BASE_URL, "test-key"),
        Box::new(UnreachableHttp),
        HtmlView::new(),
    );

    let result = widget.fetch_weather("London").await;

    assert!(matches!(result, Err(WidgetError::Transport(_))));
    assert!(widget.view().error_text().contains("connection refused"));
    assert!(!widget.view().is_loading());
}

#[tokio::test]
async fn widget_recovers_after_error() {
    let http = FakeHttp::ok("Paris", 6);
    let mut widget = widget(&http);

    widget.submit_search("").await.unwrap_err();
    widget.submit_search("paris").await.unwrap();

    assert_eq!(widget.view().error_text(), "");
    assert_eq!(widget.state(), WidgetState::Displayed);
}

// ============================================================================
// History
// ============================================================================

#[tokio::test]
async fn success_records_resolved_city() {
    let http = FakeHttp::ok("London", 6);
    let store = MemoryStore::new();
    let mut widget = widget_with_history(&http, &store);

    widget.fetch_weather("lOnDoN").await.unwrap();

    assert_eq!(widget.recent_searches(), ["London"]);
    assert_eq!(widget.view().recent_searches(), ["London"]);
    assert_eq!(store.get(LAST_CITY_KEY).as_deref(), Some("London"));
    assert_eq!(store.get(RECENT_SEARCHES_KEY).as_deref(), Some(r#"["London"]"#));
}

#[tokio::test]
async fn failed_fetch_leaves_history_untouched() {
    let store = MemoryStore::new();
    let mut widget = widget_with_history(&FakeHttp::ok("Rome", 6), &store);
    widget.fetch_weather("Rome").await.unwrap();

    let failing = FakeHttp::ok("Rome", 6).with_current(404, "{}");
    let mut widget = widget_with_history(&failing, &store);
    widget.fetch_weather("Nowhere").await.unwrap_err();

    assert_eq!(widget.recent_searches(), ["Rome"]);
    assert_eq!(store.get(LAST_CITY_KEY).as_deref(), Some("Rome"));
}

#[tokio::test]
async fn recent_button_refetches_that_city() {
    let http = FakeHttp::ok("Madrid", 6);
    let store = MemoryStore::new();
    let mut widget = widget_with_history(&http, &store);

    widget
        .handle(UiEvent::RecentSelected("Madrid".to_string()))
        .await
        .unwrap();

    assert_eq!(http.calls_to("/weather"), ["Madrid"]);
}

#[tokio::test]
async fn startup_with_last_city_fetches_exactly_once() {
    let mut store = MemoryStore::new();
    store.set(LAST_CITY_KEY, "Kyiv").unwrap();
    store.set(RECENT_SEARCHES_KEY, r#"["Kyiv","Oslo"]"#).unwrap();

    let http = FakeHttp::ok("Kyiv", 6);
    let mut widget = widget_with_history(&http, &store);
    widget.init().await;

    assert_eq!(http.calls_to("/weather"), ["Kyiv"]);
    assert_eq!(http.calls_to("/forecast"), ["Kyiv"]);
    assert_eq!(widget.view().weather().unwrap().title, "Kyiv, GB");
    assert_eq!(widget.view().recent_searches(), ["Kyiv", "Oslo"]);
}

#[tokio::test]
async fn startup_without_history_shows_welcome_only() {
    let http = FakeHttp::ok("Kyiv", 6);
    let mut widget = widget_with_history(&http, &MemoryStore::new());
    widget.init().await;

    assert!(http.calls().is_empty());
    assert!(widget.view().weather_html().contains("Search for a city"));
    assert!(widget.view().recent_searches().is_empty());
    assert_eq!(widget.state(), WidgetState::Idle);
}

#[tokio::test]
async fn clear_history_wipes_store_so_next_startup_is_fresh() {
    let store = MemoryStore::new();
    let http = FakeHttp::ok("Berlin", 6);
    let mut widget = widget_with_history(&http, &store);
    widget.fetch_weather("Berlin").await.unwrap();

    widget.handle(UiEvent::ClearHistory).await.unwrap();

    assert!(widget.recent_searches().is_empty());
    assert!(widget.view().recent_searches().is_empty());
    assert!(!store.contains_key(LAST_CITY_KEY));
    assert!(!store.contains_key(RECENT_SEARCHES_KEY));

    let fresh_http = FakeHttp::ok("Berlin", 6);
    let mut restarted = widget_with_history(&fresh_http, &store);
    restarted.init().await;

    assert!(fresh_http.calls().is_empty());
    assert!(restarted.view().recent_searches().is_empty());
}
