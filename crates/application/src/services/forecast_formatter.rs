//! Forecast formatting
//!
//! Pure functions that turn rounded model predictions into the text fields
//! of a [`Forecast`]. Numbers render in shortest round-trip form with whole
//! values keeping one decimal place (`25.0`). Percentages are clamped to
//! `[0, 100]` and a clamped bound renders bare (`0`, `100`).

use domain::{Forecast, RainCategory};
use forecast_core::Predictions;

const PERCENT_MIN: f64 = 0.0;
const PERCENT_MAX: f64 = 100.0;

/// Round to two decimal places
///
/// Goes through the decimal rendering so values like `2.675` round on
/// their exact binary value rather than on `x * 100`.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Render a number in shortest form, keeping `.0` on whole values
#[must_use]
pub fn render_number(value: f64) -> String {
    format!("{value:?}")
}

/// Render a value clamped to `[0, 100]`
#[must_use]
pub fn render_percent(value: f64) -> String {
    if value.is_nan() || value <= PERCENT_MIN {
        "0".to_string()
    } else if value >= PERCENT_MAX {
        "100".to_string()
    } else {
        render_number(value)
    }
}

/// Build the summary sentence
#[must_use]
pub fn format_explanation(precipitation: f64, temperature: f64) -> String {
    format!(
        "Based on real-time weather data, expect {} with a temperature of {}°C",
        RainCategory::from_precipitation(precipitation),
        render_number(temperature)
    )
}

/// Format already-rounded predictions into a forecast
#[must_use]
pub fn format_forecast(predictions: &Predictions) -> Forecast {
    Forecast {
        temperature: format!("{}°C", render_number(predictions.temperature)),
        rain_probability: format!("{}%", render_percent(predictions.precipitation * 100.0)),
        humidity: format!("{}%", render_percent(predictions.humidity)),
        wind_speed: format!("{} km/h", render_number(predictions.wind_speed)),
        explanation: format_explanation(predictions.precipitation, predictions.temperature),
    }
}
