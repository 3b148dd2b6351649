//! OpenWeatherProvider against a mock HTTP server.

use serde_json::json;
use weather_core::{OpenWeatherProvider, ParseError, UNKNOWN_DESCRIPTION, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::with_base_url("TEST_KEY".into(), server.uri()).unwrap()
}

fn entry(dt_txt: &str, kelvin: f64, desc: &str) -> serde_json::Value {
    json!({
        "dt_txt": dt_txt,
        "main": { "temp": kelvin },
        "weather": [ { "description": desc } ]
    })
}

#[tokio::test]
async fn current_weather_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "São Paulo"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "São Paulo",
            "main": { "temp": 313.15, "feels_like": 315.15, "humidity": 40 },
            "wind": { "speed": 2.5 },
            "weather": [ { "description": "thunderstorm with rain" } ]
        })))
        .mount(&server)
        .await;

    let cw = provider(&server).current("São Paulo").await.unwrap();

    assert_eq!(cw.city, "São Paulo");
    assert_eq!(cw.description, "thunderstorm with rain");
    assert!((cw.temp_c - 40.0).abs() < 1e-9);
    assert!((cw.wind_kmh - 9.0).abs() < 1e-9);
    assert_eq!(cw.humidity_pct, 40);
}

#[tokio::test]
async fn error_status_body_is_still_parsed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "cod": 401,
            "message": "Invalid API key."
        })))
        .mount(&server)
        .await;

    let err = provider(&server).current("Paris").await.unwrap_err();
    assert!(matches!(err, ParseError::MissingField("main")));
}

#[tokio::test]
async fn forecast_is_aggregated_into_days() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("q", "Lima"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": [
                entry("2025-10-22 00:00:00", 290.15, "clear sky"),
                entry("2025-10-21 21:00:00", 288.15, "few clouds"),
                entry("2025-10-22 12:00:00", 298.15, "light rain"),
                entry("2025-10-22 15:00:00", 296.15, "overcast clouds"),
                { "dt_txt": "2025-10-23", "main": { "temp": 280.15 }, "weather": [] },
                { "dt_txt": "2025-10-24 12:00:00", "main": {},
                  "weather": [ { "description": "rain" } ] }
            ]
        })))
        .mount(&server)
        .await;

    let days = provider(&server).forecast("Lima").await.unwrap();

    assert_eq!(days.len(), 3);
    assert_eq!(days[0].date, "2025-10-21");
    assert_eq!(days[0].description, "few clouds");

    assert_eq!(days[1].date, "2025-10-22");
    assert!((days[1].min_c - 17.0).abs() < 1e-9);
    assert!((days[1].max_c - 25.0).abs() < 1e-9);
    assert_eq!(days[1].description, "light rain");

    assert_eq!(days[2].date, "2025-10-23");
    assert_eq!(days[2].description, UNKNOWN_DESCRIPTION);

    // Its only entry had no temperature.
    assert!(!days.iter().any(|d| d.date == "2025-10-24"));
}

#[tokio::test]
async fn forecast_with_empty_list_gives_no_days() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "list": [] })))
        .mount(&server)
        .await;

    let days = provider(&server).forecast("Nowhere").await.unwrap();
    assert!(days.is_empty());
}

#[tokio::test]
async fn unreachable_host_yields_empty_body() {
    let provider = OpenWeatherProvider::with_base_url("KEY".into(), "http://127.0.0.1:1").unwrap();

    let err = provider.current("Paris").await.unwrap_err();
    assert!(matches!(err, ParseError::EmptyBody));

    let err = provider.forecast("Paris").await.unwrap_err();
    assert!(matches!(err, ParseError::EmptyBody));
}
