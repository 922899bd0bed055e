//! Assistant Routes - naming the companion

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use kokoro::StateRepository;

use crate::models::{AssistantResponse, SetAssistantRequest};
use crate::routes::error_response;
use crate::AppState;

/// Get the chosen assistant name
#[utoipa::path(
    get,
    path = "/kokoro/assistant",
    responses(
        (status = 200, description = "Current assistant name", body = AssistantResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assistant"
)]
pub async fn get_assistant(
    State(state): State<AppState>,
) -> Result<Json<AssistantResponse>, (StatusCode, String)> {
    let name = state
        .repo
        .load_assistant_name()
        .await
        .map_err(error_response)?;

    Ok(Json(AssistantResponse { name }))
}

/// Choose (or rename) the assistant
#[utoipa::path(
    put,
    path = "/kokoro/assistant",
    request_body = SetAssistantRequest,
    responses(
        (status = 200, description = "Assistant name saved", body = AssistantResponse),
        (status = 400, description = "Empty name"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assistant"
)]
pub async fn set_assistant(
    State(state): State<AppState>,
    Json(payload): Json<SetAssistantRequest>,
) -> Result<Json<AssistantResponse>, (StatusCode, String)> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "assistant name must not be empty".to_string(),
        ));
    }

    state
        .repo
        .save_assistant_name(name)
        .await
        .map_err(error_response)?;

    Ok(Json(AssistantResponse {
        name: Some(name.to_string()),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/kokoro/assistant", get(get_assistant).put(set_assistant))
}
