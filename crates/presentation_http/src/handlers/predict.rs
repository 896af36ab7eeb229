//! Forecast handler

use axum::{Json, extract::State};
use domain::Forecast;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Forecast request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Free-form location name, echoed back
    pub location: String,
    /// Free-form date, echoed back
    pub date: String,
}

/// Forecast response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub location: String,
    pub date: String,
    pub forecast: Forecast,
}

/// Predict the weather
///
/// The request's location and date are echoed verbatim; the forecast
/// itself always comes from the configured location's latest observations.
#[instrument(skip(state, request), fields(location = %request.location, date = %request.date))]
pub async fn predict_weather(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let forecast = state
        .prediction_service
        .predict(&request.location, &request.date)
        .await
        .inspect_err(|e| debug!(error = %e, "Prediction failed"))?;

    Ok(Json(PredictResponse {
        location: request.location,
        date: request.date,
        forecast,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserialization() {
        let json = r#"{"location":"Mumbai","date":"2024-01-01"}"#;
        let req: PredictRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.location, "Mumbai");
        assert_eq!(req.date, "2024-01-01");
    }

    #[test]
    fn request_requires_both_fields() {
        assert!(serde_json::from_str::<PredictRequest>(r#"{"location":"Mumbai"}"#).is_err());
    }

    #[test]
    fn response_nests_forecast() {
        let resp = PredictResponse {
            location: "Mumbai".to_string(),
            date: "tomorrow".to_string(),
            forecast: Forecast {
                temperature: "28.4°C".to_string(),
                rain_probability: "0%".to_string(),
                humidity: "74.25%".to_string(),
                wind_speed: "11.2 km/h".to_string(),
                explanation: "Based on real-time weather data, expect clear weather with a temperature of 28.4°C".to_string(),
            },
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["date"], "tomorrow");
        assert_eq!(json["forecast"]["humidity"], "74.25%");
    }
}
