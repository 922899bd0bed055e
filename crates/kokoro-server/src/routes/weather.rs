//! Weather Proxy Route
//!
//! Public endpoint that forwards a location to the upstream weather API
//! and reshapes the answer. Errors use the `{error}` body the clients
//! expect; upstream failures are logged and surfaced generically.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use kokoro::{WeatherProvider, WeatherQuery};

use crate::models::{WeatherErrorBody, WeatherParams, WeatherResponse};
use crate::AppState;

type WeatherError = (StatusCode, Json<WeatherErrorBody>);

fn weather_error(status: StatusCode, message: &str) -> WeatherError {
    (
        status,
        Json(WeatherErrorBody {
            error: message.to_string(),
        }),
    )
}

/// Current weather for coordinates or a postal code
#[utoipa::path(
    get,
    path = "/api/weather",
    params(WeatherParams),
    responses(
        (status = 200, description = "Normalized weather", body = WeatherResponse),
        (status = 400, description = "Missing location", body = WeatherErrorBody),
        (status = 500, description = "Configuration or upstream error", body = WeatherErrorBody)
    ),
    tag = "Weather"
)]
pub async fn current_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherResponse>, WeatherError> {
    let provider = state.weather.as_ref().ok_or_else(|| {
        weather_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "APIキーがサーバーに設定されていません",
        )
    })?;

    // Coordinates take priority over the postal code
    let query = match (params.lat, params.lon, params.zip) {
        (Some(lat), Some(lon), _) => WeatherQuery::Coordinates { lat, lon },
        (_, _, Some(zip)) if !zip.trim().is_empty() => WeatherQuery::PostalCode(zip),
        _ => {
            return Err(weather_error(
                StatusCode::BAD_REQUEST,
                "位置情報または郵便番号が必要です",
            ))
        }
    };

    let observation = provider.current(&query).await.map_err(|e| {
        tracing::error!("Weather lookup failed: {}", e);
        weather_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "サーバー内部でエラーが起きました",
        )
    })?;

    Ok(Json(WeatherResponse::new(observation)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/weather", get(current_weather))
}
