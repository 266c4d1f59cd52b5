//! Integration tests for the dashboard weather flow using wiremock.

use std::sync::Arc;
use std::time::Duration;

use pulse_core::Logger;
use pulse_state::{Dashboard, FetchOutcome};
use pulse_stats::ProvinceDatasetCache;
use pulse_weather::{IconColor, WeatherIcon, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast(temperature: f64, weather_code: i32) -> serde_json::Value {
    serde_json::json!({
        "latitude": 35.7,
        "longitude": 51.4,
        "timezone": "Asia/Tehran",
        "current": {
            "time": "2026-10-18T12:00",
            "interval": 900,
            "temperature_2m": temperature,
            "weather_code": weather_code
        }
    })
}

fn dashboard_for(server: &MockServer) -> Dashboard {
    let provider = WeatherProvider::with_endpoint(
        &format!("{}/v1/forecast", server.uri()),
        "Asia/Tehran",
        Duration::from_secs(5),
    )
    .unwrap();
    Dashboard::with_parts(
        provider,
        ProvinceDatasetCache::seeded(7),
        Logger::default(),
        "Tehran",
    )
}

#[tokio::test]
async fn test_successful_fetch_publishes_snapshot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "29.5918"))
        .and(query_param("timezone", "Asia/Tehran"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast(27.5, 95)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dash = dashboard_for(&mock_server);
    let mut rx = dash.subscribe_weather();

    let outcome = dash.select_city_and_fetch("Shiraz").await;

    assert_eq!(outcome, FetchOutcome::Updated);
    assert_eq!(dash.selected_province(), "Fars");
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.temperature, Some(28));
    assert_eq!(snapshot.icon, WeatherIcon::Thunderstorm);
    assert_eq!(snapshot.icon_color, IconColor::PurpleSoft);
    assert!(!snapshot.loading);
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_values() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast(20.6, 61)))
        .mount(&mock_server)
        .await;

    let dash = dashboard_for(&mock_server);
    assert_eq!(dash.fetch_weather("Tehran").await, FetchOutcome::Updated);
    let before = dash.weather();

    mock_server.reset().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let outcome = dash.fetch_weather("Tehran").await;

    assert!(matches!(outcome, FetchOutcome::Failed { .. }));
    let after = dash.weather();
    assert!(!after.loading);
    assert_eq!(after.temperature, before.temperature);
    assert_eq!(after.temperature, Some(21));
    assert_eq!(after.icon, WeatherIcon::Rain);
    assert_eq!(after.icon_color, before.icon_color);
}

#[tokio::test]
async fn test_malformed_response_is_handled_like_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let dash = dashboard_for(&mock_server);
    let outcome = dash.fetch_weather("Mashhad").await;

    assert!(matches!(outcome, FetchOutcome::Failed { .. }));
    let snapshot = dash.weather();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.temperature, None);
    assert_eq!(snapshot.icon, WeatherIcon::Sunny);
}

#[tokio::test]
async fn test_loading_is_published_while_in_flight() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(forecast(5.0, 71))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock_server)
        .await;

    let dash = Arc::new(dashboard_for(&mock_server));
    assert_eq!(dash.fetch_weather("Tabriz").await, FetchOutcome::Updated);
    assert!(!dash.weather().loading);

    let background = Arc::clone(&dash);
    let handle = tokio::spawn(async move { background.fetch_weather("Tabriz").await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    let in_flight = dash.weather();
    assert!(in_flight.loading);
    assert_eq!(in_flight.temperature, Some(5));
    assert_eq!(in_flight.icon, WeatherIcon::Snow);

    assert_eq!(handle.await.unwrap(), FetchOutcome::Updated);
    assert!(!dash.weather().loading);
}

#[tokio::test]
async fn test_stale_fetch_does_not_overwrite_newer_city() {
    let mock_server = MockServer::start().await;

    // Tehran answers slowly, Isfahan immediately.
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "35.6892"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(forecast(30.0, 0))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "32.6546"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast(12.2, 45)))
        .mount(&mock_server)
        .await;

    let dash = Arc::new(dashboard_for(&mock_server));

    let slow = Arc::clone(&dash);
    let stale = tokio::spawn(async move { slow.select_city_and_fetch("Tehran").await });
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(
        dash.select_city_and_fetch("Isfahan").await,
        FetchOutcome::Updated
    );
    assert_eq!(stale.await.unwrap(), FetchOutcome::Superseded);

    let snapshot = dash.weather();
    assert_eq!(dash.selected_city(), "Isfahan");
    assert_eq!(snapshot.temperature, Some(12));
    assert_eq!(snapshot.icon, WeatherIcon::Fog);
}

#[tokio::test]
async fn test_unknown_city_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast(1.0, 0)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dash = dashboard_for(&mock_server);
    let outcome = dash.select_city_and_fetch("Gotham").await;

    assert_eq!(outcome, FetchOutcome::UnknownCity);
    assert!(dash.weather().loading);
    assert_eq!(dash.selected_province(), "Tehran");
}
