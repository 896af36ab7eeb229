//! Integration tests for the archive client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use chrono::NaiveDate;
use integration_weather::{ArchiveClient, ArchiveConfig, OpenMeteoArchiveClient, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample Open-Meteo archive response with three hours of data
fn sample_archive_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 19.125,
        "longitude": 72.875,
        "generationtime_ms": 0.41,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "timezone_abbreviation": "GMT",
        "elevation": 14.0,
        "hourly_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "precipitation": "mm",
            "relative_humidity_2m": "%",
            "wind_speed_10m": "km/h",
            "surface_pressure": "hPa"
        },
        "hourly": {
            "time": ["2024-01-15T00:00", "2024-01-15T01:00", "2024-01-15T02:00"],
            "temperature_2m": [24.3, 23.9, null],
            "precipitation": [0.0, 0.1, 0.0],
            "relative_humidity_2m": [68, 71, 73],
            "wind_speed_10m": [9.4, null, 7.2],
            "surface_pressure": [1010.2, 1010.0, 1009.8]
        }
    })
}

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenMeteoArchiveClient {
    let config = ArchiveConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    OpenMeteoArchiveClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the /archive endpoint with the given response
async fn setup_archive_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/archive"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_get_hourly_success() {
    let mock_server = MockServer::start().await;

    setup_archive_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_archive_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_hourly(19.076, 72.8777, jan(14), jan(15)).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let weather = result.unwrap();
    assert_eq!(weather.records.len(), 3);
    assert_eq!(weather.latitude, Some(19.125));
    assert!((weather.records[0].temperature.unwrap() - 24.3).abs() < 0.01);
    assert!((weather.records[1].humidity.unwrap() - 71.0).abs() < 0.01);
    assert!((weather.records[2].pressure.unwrap() - 1009.8).abs() < 0.01);
}

#[tokio::test]
async fn test_null_values_are_kept_as_missing() {
    let mock_server = MockServer::start().await;

    setup_archive_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_archive_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let weather = client
        .get_hourly(19.076, 72.8777, jan(14), jan(15))
        .await
        .unwrap();

    assert_eq!(weather.records[2].temperature, None);
    assert_eq!(weather.records[1].wind_speed, None);
}

#[tokio::test]
async fn test_request_sends_expected_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/archive"))
        .and(query_param("latitude", "19.076"))
        .and(query_param("longitude", "72.8777"))
        .and(query_param("start_date", "2024-01-01"))
        .and(query_param("end_date", "2024-01-31"))
        .and(query_param(
            "hourly",
            "temperature_2m,precipitation,relative_humidity_2m,wind_speed_10m,surface_pressure",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_archive_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_hourly(19.076, 72.8777, jan(1), jan(31)).await;

    assert!(result.is_ok(), "Query parameters should match: {result:?}");
}

#[tokio::test]
async fn test_coordinates_are_not_validated_locally() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/archive"))
        .and(query_param("latitude", "123.4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_archive_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_hourly(123.4, 500.0, jan(15), jan(1)).await;

    assert!(result.is_ok(), "Out-of-range input is passed through: {result:?}");
}

#[tokio::test]
async fn test_each_call_hits_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_archive_response()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    client.get_hourly(19.076, 72.8777, jan(1), jan(2)).await.unwrap();
    client.get_hourly(19.076, 72.8777, jan(1), jan(2)).await.unwrap();
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_archive_mock(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_hourly(19.076, 72.8777, jan(1), jan(2)).await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_archive_mock(&mock_server, ResponseTemplate::new(429)).await;

    let client = create_test_client(&mock_server);
    let result = client.get_hourly(19.076, 72.8777, jan(1), jan(2)).await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_client_error_returns_request_failed() {
    let mock_server = MockServer::start().await;

    setup_archive_mock(
        &mock_server,
        ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": true,
            "reason": "Parameter 'start_date' is out of allowed range"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_hourly(19.076, 72.8777, jan(1), jan(2)).await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_returns_parse_error() {
    let mock_server = MockServer::start().await;

    setup_archive_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_hourly(19.076, 72.8777, jan(1), jan(2)).await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_missing_hourly_returns_data_shape() {
    let mock_server = MockServer::start().await;

    setup_archive_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": 19.125,
            "longitude": 72.875
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_hourly(19.076, 72.8777, jan(1), jan(2)).await;

    assert!(
        matches!(result, Err(WeatherError::DataShape(_))),
        "Expected DataShape, got: {result:?}"
    );
}

#[tokio::test]
async fn test_mismatched_columns_return_data_shape() {
    let mock_server = MockServer::start().await;

    let mut body = sample_archive_response();
    body["hourly"]["precipitation"] = serde_json::json!([0.0, 0.1]);
    setup_archive_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let result = client.get_hourly(19.076, 72.8777, jan(1), jan(2)).await;

    assert!(
        matches!(&result, Err(WeatherError::DataShape(msg)) if msg.contains("precipitation")),
        "Expected DataShape, got: {result:?}"
    );
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    setup_archive_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(sample_archive_response())
            .set_delay(std::time::Duration::from_secs(3)),
    )
    .await;

    let config = ArchiveConfig {
        base_url: mock_server.uri(),
        timeout_secs: 1,
    };
    let client = OpenMeteoArchiveClient::new(config).unwrap();
    let result = client.get_hourly(19.076, 72.8777, jan(1), jan(2)).await;

    assert!(
        matches!(result, Err(WeatherError::Timeout(1))),
        "Expected Timeout, got: {result:?}"
    );
}

#[tokio::test]
async fn test_connection_refused() {
    let config = ArchiveConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
    };
    let client = OpenMeteoArchiveClient::new(config).unwrap();
    let result = client.get_hourly(19.076, 72.8777, jan(1), jan(2)).await;

    assert!(
        matches!(
            result,
            Err(WeatherError::ConnectionFailed(_) | WeatherError::RequestFailed(_))
        ),
        "Expected a connection error, got: {result:?}"
    );
}
