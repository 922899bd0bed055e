//! Login Routes - the app-open bonus and the power bank

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use chrono::Local;

use crate::models::{LoginResponse, PowerResponse};
use crate::routes::error_response;
use crate::AppState;

/// Claim the login bonus for today. Idempotent within a calendar day.
#[utoipa::path(
    post,
    path = "/kokoro/login",
    responses(
        (status = 200, description = "Bonus applied (or already claimed)", body = LoginResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Login"
)]
pub async fn login(
    State(state): State<AppState>,
) -> Result<Json<LoginResponse>, (StatusCode, String)> {
    let today = Local::now().date_naive();
    let (bonus, bank) = state
        .care_service
        .login(today)
        .await
        .map_err(error_response)?;

    let response = match bonus {
        Some(bonus) => LoginResponse {
            awarded: true,
            days: bonus.days,
            points: bonus.points,
            power_bank: bank,
        },
        None => {
            let days = state
                .care_service
                .login_streak()
                .await
                .map_err(error_response)?
                .map(|streak| streak.consecutive_days)
                .unwrap_or(0);
            LoginResponse {
                awarded: false,
                days,
                points: 0,
                power_bank: bank,
            }
        }
    };

    Ok(Json(response))
}

/// Current power bank
#[utoipa::path(
    get,
    path = "/kokoro/power",
    responses(
        (status = 200, description = "Power bank total", body = PowerResponse)
    ),
    tag = "Login"
)]
pub async fn get_power(State(state): State<AppState>) -> Json<PowerResponse> {
    Json(PowerResponse {
        power: state.care_service.power(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kokoro/login", post(login))
        .route("/kokoro/power", get(get_power))
}
