//! HTTP provider tests against a mock OpenWeatherMap server

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weatherwave::config::WeatherConfig;
use weatherwave::{
    Condition, Coordinates, OpenWeatherMapClient, WeatherProvider, WeatherWaveError,
};

const API_KEY: &str = "test_api_key_123";

fn client(server: &MockServer) -> OpenWeatherMapClient {
    OpenWeatherMapClient::new(&WeatherConfig {
        api_key: Some(API_KEY.to_string()),
        base_url: server.uri(),
        timeout_seconds: 5,
    })
    .unwrap()
}

fn london() -> Coordinates {
    Coordinates::new(51.5085, -0.1257)
}

fn current_body() -> serde_json::Value {
    json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"main": "Clouds", "description": "broken clouds"}],
        "main": {"temp": 12.4, "feels_like": 11.6, "humidity": 81},
        "visibility": 10000,
        "wind": {"speed": 5.1},
        "dt": 1_700_000_000,
        "name": "London"
    })
}

fn forecast_body() -> serde_json::Value {
    json!({
        "list": [
            {
                "dt": 1_700_010_800,
                "weather": [{"main": "Rain", "description": "light rain"}],
                "main": {"temp": 10.0, "humidity": 90},
                "wind": {"speed": 6.0}
            },
            {
                "dt": 1_700_021_600,
                "weather": [{"main": "Clear", "description": "clear sky"}],
                "main": {"temp": 8.5, "humidity": 70},
                "wind": {"speed": 3.0}
            }
        ],
        "city": {"name": "London", "coord": {"lat": 51.5085, "lon": -0.1257}}
    })
}

async fn mount(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(query_param("appid", API_KEY))
        .and(query_param("units", "metric"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn current_weather_is_parsed() {
    let server = MockServer::start().await;
    mount(&server, "/weather", ResponseTemplate::new(200).set_body_json(current_body())).await;

    let reading = client(&server).current(london()).await.unwrap();
    assert_eq!(reading.temperature, 12.4);
    assert_eq!(reading.feels_like, 11.6);
    assert_eq!(reading.humidity, 81);
    assert_eq!(reading.condition, Condition::Clouds);
    assert_eq!(reading.description, "broken clouds");
    assert_eq!(reading.visibility, Some(10000));
    assert_eq!(reading.location_name.as_deref(), Some("London"));
}

#[tokio::test]
async fn outlook_entries_take_city_name() {
    let server = MockServer::start().await;
    mount(&server, "/forecast", ResponseTemplate::new(200).set_body_json(forecast_body())).await;

    let outlook = client(&server).outlook(london()).await.unwrap();
    assert_eq!(outlook.len(), 2);
    assert_eq!(outlook[0].condition, Condition::Rain);
    assert_eq!(outlook[1].feels_like, 8.5);
    assert!(outlook.iter().all(|r| r.location_name.as_deref() == Some("London")));
}

#[tokio::test]
async fn snapshot_returns_both_legs() {
    let server = MockServer::start().await;
    mount(&server, "/weather", ResponseTemplate::new(200).set_body_json(current_body())).await;
    mount(&server, "/forecast", ResponseTemplate::new(200).set_body_json(forecast_body())).await;

    let snapshot = client(&server).snapshot(london()).await.unwrap();
    assert_eq!(snapshot.current.temperature, 12.4);
    assert_eq!(snapshot.outlook.len(), 2);
}

#[tokio::test]
async fn snapshot_fails_when_one_leg_fails() {
    let server = MockServer::start().await;
    mount(&server, "/weather", ResponseTemplate::new(200).set_body_json(current_body())).await;
    mount(&server, "/forecast", ResponseTemplate::new(500).set_body_string("boom")).await;

    let err = client(&server).snapshot(london()).await.unwrap_err();
    assert!(matches!(err, WeatherWaveError::Api { .. }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn unauthorized_is_an_api_error() {
    let server = MockServer::start().await;
    mount(&server, "/weather", ResponseTemplate::new(401)).await;

    let err = client(&server).current(london()).await.unwrap_err();
    assert!(matches!(err, WeatherWaveError::Api { .. }));
    assert!(err.to_string().contains("Invalid API key"));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    mount(&server, "/weather", ResponseTemplate::new(200).set_body_string("{not json")).await;

    let err = client(&server).current(london()).await.unwrap_err();
    assert!(matches!(err, WeatherWaveError::Parse { .. }));
}

#[tokio::test]
async fn missing_wind_is_a_validation_error() {
    let server = MockServer::start().await;
    let mut body = current_body();
    body.as_object_mut().unwrap().remove("wind");
    mount(&server, "/weather", ResponseTemplate::new(200).set_body_json(body)).await;

    let err = client(&server).current(london()).await.unwrap_err();
    assert!(matches!(err, WeatherWaveError::Validation { .. }));
}

#[tokio::test]
async fn unreachable_server_is_an_api_error() {
    let server = MockServer::start().await;
    let c = client(&server);
    drop(server);

    let err = c.current(london()).await.unwrap_err();
    assert!(matches!(err, WeatherWaveError::Api { .. }));
}
