//! Mood Routes
//!
//! Saving opens a short undo window; a new save closes the previous one.

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};

use crate::application::undo::UNDO_WINDOW;
use crate::models::{MoodRecordResponse, SaveMoodRequest, SaveMoodResponse, UndoMoodResponse};
use crate::routes::error_response;
use crate::AppState;

/// Mood history, newest first
#[utoipa::path(
    get,
    path = "/kokoro/mood",
    responses(
        (status = 200, description = "Mood history", body = Vec<MoodRecordResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Mood"
)]
pub async fn list_mood(
    State(state): State<AppState>,
) -> Result<Json<Vec<MoodRecordResponse>>, (StatusCode, String)> {
    let history = state
        .care_service
        .mood_history()
        .await
        .map_err(error_response)?;

    Ok(Json(history.into_iter().map(Into::into).collect()))
}

/// Record today's mood (replaces any same-date record)
#[utoipa::path(
    put,
    path = "/kokoro/mood",
    request_body = SaveMoodRequest,
    responses(
        (status = 200, description = "Mood saved", body = SaveMoodResponse),
        (status = 400, description = "Score out of range"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Mood"
)]
pub async fn save_mood(
    State(state): State<AppState>,
    Json(payload): Json<SaveMoodRequest>,
) -> Result<Json<SaveMoodResponse>, (StatusCode, String)> {
    let record = state
        .care_service
        .save_mood(payload.into())
        .await
        .map_err(error_response)?;

    Ok(Json(SaveMoodResponse {
        record: record.into(),
        undo_window_ms: UNDO_WINDOW.as_millis() as u64,
    }))
}

/// Undo the last mood save, while its window is open
#[utoipa::path(
    post,
    path = "/kokoro/mood/undo",
    responses(
        (status = 200, description = "Whether a save was undone", body = UndoMoodResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Mood"
)]
pub async fn undo_mood(
    State(state): State<AppState>,
) -> Result<Json<UndoMoodResponse>, (StatusCode, String)> {
    let restored = state
        .care_service
        .undo_mood()
        .await
        .map_err(error_response)?;

    Ok(Json(UndoMoodResponse { restored }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kokoro/mood", get(list_mood).put(save_mood))
        .route("/kokoro/mood/undo", post(undo_mood))
}
