//! Weather proxy DTOs
//!
//! The response shape is part of the wire contract consumed by clients,
//! including the `{error}` body on failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use kokoro::WeatherObservation;

/// Query parameters: coordinates win over the postal code when both are
/// present.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherParams {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub zip: Option<String>,
}

/// Normalized weather for the client
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WeatherResponse {
    /// One of sun / cloud / rain / snow
    pub condition: String,
    pub temp_c: f64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl WeatherResponse {
    pub fn new(observation: WeatherObservation) -> Self {
        Self {
            condition: observation.condition.to_string(),
            temp_c: observation.temp_c,
            message: observation.message,
            place: observation.place,
            updated_at: Utc::now(),
        }
    }
}

/// Error body of the weather endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WeatherErrorBody {
    pub error: String,
}
