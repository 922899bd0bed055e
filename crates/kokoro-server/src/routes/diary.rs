//! Diary Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;

use crate::models::{DiaryEntryResponse, SaveDiaryRequest, SaveDiaryResponse};
use crate::routes::error_response;
use crate::AppState;

/// Diary history, newest first
#[utoipa::path(
    get,
    path = "/kokoro/diary",
    responses(
        (status = 200, description = "Diary history", body = Vec<DiaryEntryResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Diary"
)]
pub async fn list_diary(
    State(state): State<AppState>,
) -> Result<Json<Vec<DiaryEntryResponse>>, (StatusCode, String)> {
    let history = state
        .care_service
        .diary_history()
        .await
        .map_err(error_response)?;

    Ok(Json(history.into_iter().map(Into::into).collect()))
}

/// Save or update the entry for a date
#[utoipa::path(
    put,
    path = "/kokoro/diary",
    request_body = SaveDiaryRequest,
    responses(
        (status = 200, description = "Diary saved", body = SaveDiaryResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Diary"
)]
pub async fn save_diary(
    State(state): State<AppState>,
    Json(payload): Json<SaveDiaryRequest>,
) -> Result<Json<SaveDiaryResponse>, (StatusCode, String)> {
    let entry: kokoro::DiaryEntry = payload.into();
    let (credited, power_bank) = state
        .care_service
        .save_diary(entry.clone())
        .await
        .map_err(error_response)?;

    Ok(Json(SaveDiaryResponse {
        entry: entry.into(),
        credited,
        power_bank,
    }))
}

/// Delete the entry for a date
#[utoipa::path(
    delete,
    path = "/kokoro/diary/{date}",
    params(("date" = String, Path, description = "Entry date (YYYY-MM-DD)")),
    responses(
        (status = 200, description = "Entry deleted"),
        (status = 404, description = "No entry for that date"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Diary"
)]
pub async fn delete_diary(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let deleted = state
        .care_service
        .delete_diary(date)
        .await
        .map_err(error_response)?;

    if !deleted {
        return Err((
            StatusCode::NOT_FOUND,
            format!("No diary entry for {}", date),
        ));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Diary entry deleted"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kokoro/diary", get(list_diary).put(save_diary))
        .route("/kokoro/diary/:date", axum::routing::delete(delete_diary))
}
