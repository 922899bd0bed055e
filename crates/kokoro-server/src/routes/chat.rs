//! Chat Routes - the companion conversation
//!
//! One logical session at a time. Finishing a session turns the
//! transcript into a monster and persists it.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use kokoro::StateRepository;

use crate::models::{ChatTurnRequest, ChatTurnResponse, MonsterResponse, StartChatResponse};
use crate::routes::error_response;
use crate::AppState;

/// Open a chat session with the named assistant
#[utoipa::path(
    post,
    path = "/kokoro/chat/start",
    responses(
        (status = 200, description = "Session opened", body = StartChatResponse),
        (status = 409, description = "No assistant name chosen yet"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chat"
)]
pub async fn start_chat(
    State(state): State<AppState>,
) -> Result<Json<StartChatResponse>, (StatusCode, String)> {
    let assistant_name = state
        .repo
        .load_assistant_name()
        .await
        .map_err(error_response)?
        .ok_or((
            StatusCode::CONFLICT,
            "assistant name not set".to_string(),
        ))?;

    state.chat_service.start(assistant_name.clone());

    Ok(Json(StartChatResponse { assistant_name }))
}

/// One chat turn
#[utoipa::path(
    post,
    path = "/kokoro/chat/message",
    request_body = ChatTurnRequest,
    responses(
        (status = 200, description = "Companion replied", body = ChatTurnResponse),
        (status = 409, description = "No open session"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chat"
)]
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<ChatTurnRequest>,
) -> Result<Json<ChatTurnResponse>, (StatusCode, String)> {
    let reply = state
        .chat_service
        .send(&payload.message)
        .await
        .map_err(error_response)?;

    Ok(Json(ChatTurnResponse { reply }))
}

/// Close the session and create the monster from its transcript
#[utoipa::path(
    post,
    path = "/kokoro/chat/finish",
    responses(
        (status = 200, description = "Monster created", body = MonsterResponse),
        (status = 409, description = "No open session"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chat"
)]
pub async fn finish_chat(
    State(state): State<AppState>,
) -> Result<Json<MonsterResponse>, (StatusCode, String)> {
    let monster = state.chat_service.finish().await.map_err(error_response)?;
    let monster = state
        .battle_service
        .adopt(monster)
        .await
        .map_err(error_response)?;

    Ok(Json(monster.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kokoro/chat/start", post(start_chat))
        .route("/kokoro/chat/message", post(send_message))
        .route("/kokoro/chat/finish", post(finish_chat))
}
