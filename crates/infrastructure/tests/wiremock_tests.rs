//! Integration tests for infrastructure crate
//!
//! Tests cover the archive adapter wired into the prediction service
//! against a wiremock archive endpoint.

use std::sync::Arc;

use application::{ApplicationError, ForecastSettings, PredictionService};
use forecast_core::BoostingConfig;
use infrastructure::{AppConfig, ArchiveWeatherAdapter};
use integration_weather::ArchiveConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Three days of constant hourly weather with a few nulls
fn archive_body() -> serde_json::Value {
    let times: Vec<String> = (0..72)
        .map(|i| format!("2024-05-{:02}T{:02}:00", 1 + i / 24, i % 24))
        .collect();
    let with_gaps = |value: f64| -> Vec<Option<f64>> {
        (0..72)
            .map(|i| if i % 10 == 0 { None } else { Some(value) })
            .collect()
    };

    serde_json::json!({
        "latitude": 19.125,
        "longitude": 72.875,
        "hourly": {
            "time": times,
            "temperature_2m": with_gaps(31.0),
            "precipitation": vec![0.75; 72],
            "relative_humidity_2m": with_gaps(65.0),
            "wind_speed_10m": vec![14.5; 72],
            "surface_pressure": with_gaps(1005.0)
        }
    })
}

fn service_for(server: &MockServer) -> PredictionService {
    let adapter = ArchiveWeatherAdapter::with_config(ArchiveConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    })
    .unwrap();

    let settings = ForecastSettings {
        boosting: BoostingConfig {
            n_estimators: 25,
            ..BoostingConfig::default()
        },
        ..AppConfig::default().forecast_settings()
    };
    PredictionService::new(Arc::new(adapter), settings)
}

// ============================================================================
// Pipeline Tests
// ============================================================================

mod pipeline_tests {
    use super::*;

    #[tokio::test]
    async fn train_and_predict_against_archive() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/archive"))
            .and(query_param("latitude", "19.076"))
            .and(query_param("longitude", "72.8777"))
            .respond_with(ResponseTemplate::new(200).set_body_json(archive_body()))
            .expect(2)
            .mount(&server)
            .await;

        let service = service_for(&server);
        let summary = service.train().await.unwrap();
        assert_eq!(summary.samples, 72);

        let forecast = service.predict("Mumbai", "2024-01-01").await.unwrap();
        assert_eq!(forecast.temperature, "31.0°C");
        assert_eq!(forecast.rain_probability, "75.0%");
        assert_eq!(forecast.humidity, "65.0%");
        assert_eq!(forecast.wind_speed, "14.5 km/h");
        assert_eq!(
            forecast.explanation,
            "Based on real-time weather data, expect heavy rainfall with a temperature of 31.0°C"
        );
    }

    #[tokio::test]
    async fn upstream_outage_surfaces_as_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/archive"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let service = service_for(&server);
        let err = service.train().await.unwrap_err();
        assert!(matches!(err, ApplicationError::Fetch(_)));
        assert!(!service.is_trained());
    }

    #[tokio::test]
    async fn column_with_only_nulls_is_reported() {
        let server = MockServer::start().await;
        let mut body = archive_body();
        body["hourly"]["wind_speed_10m"] = serde_json::json!(vec![serde_json::Value::Null; 72]);
        Mock::given(method("GET"))
            .and(path("/archive"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let service = service_for(&server);
        let err = service.train().await.unwrap_err();
        assert!(matches!(err, ApplicationError::AllMissingField(_)));
        assert!(err.to_string().contains("wind_speed"));
    }
}
