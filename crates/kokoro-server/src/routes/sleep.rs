//! Sleep Routes

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use kokoro::SleepRecord;

use crate::models::{SaveSleepRequest, SaveSleepResponse, SleepRecordResponse};
use crate::routes::error_response;
use crate::AppState;

/// Sleep history
#[utoipa::path(
    get,
    path = "/kokoro/sleep",
    responses(
        (status = 200, description = "Sleep history", body = Vec<SleepRecordResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Sleep"
)]
pub async fn list_sleep(
    State(state): State<AppState>,
) -> Result<Json<Vec<SleepRecordResponse>>, (StatusCode, String)> {
    let history = state
        .care_service
        .sleep_history()
        .await
        .map_err(error_response)?;

    Ok(Json(history.into_iter().map(Into::into).collect()))
}

/// Log a night of sleep (last-write-wins per date)
#[utoipa::path(
    put,
    path = "/kokoro/sleep",
    request_body = SaveSleepRequest,
    responses(
        (status = 200, description = "Sleep saved", body = SaveSleepResponse),
        (status = 400, description = "Invalid clock time"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Sleep"
)]
pub async fn save_sleep(
    State(state): State<AppState>,
    Json(payload): Json<SaveSleepRequest>,
) -> Result<Json<SaveSleepResponse>, (StatusCode, String)> {
    let record = SleepRecord::from_times(payload.date, &payload.bed_time, &payload.wake_time)
        .map_err(error_response)?;

    let (credited, power_bank) = state
        .care_service
        .save_sleep(record.clone())
        .await
        .map_err(error_response)?;

    Ok(Json(SaveSleepResponse {
        record: record.into(),
        credited,
        power_bank,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/kokoro/sleep", get(list_sleep).put(save_sleep))
}
