//! Monster Routes - the stress monster and its battles

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};

use crate::models::{AttackResponse, DismissResponse, MonsterResponse, StressRecordResponse};
use crate::routes::error_response;
use crate::AppState;

/// Get the active monster
#[utoipa::path(
    get,
    path = "/kokoro/monster",
    responses(
        (status = 200, description = "Active monster", body = MonsterResponse),
        (status = 404, description = "No active monster"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Monster"
)]
pub async fn get_monster(
    State(state): State<AppState>,
) -> Result<Json<MonsterResponse>, (StatusCode, String)> {
    let monster = state
        .battle_service
        .current()
        .await
        .map_err(error_response)?
        .ok_or((StatusCode::NOT_FOUND, "No active monster".to_string()))?;

    Ok(Json(monster.into()))
}

/// Attack with the entire power bank
#[utoipa::path(
    post,
    path = "/kokoro/monster/attack",
    responses(
        (status = 200, description = "Attack resolved", body = AttackResponse),
        (status = 400, description = "No power in the bank"),
        (status = 404, description = "No active monster"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Monster"
)]
pub async fn attack_monster(
    State(state): State<AppState>,
) -> Result<Json<AttackResponse>, (StatusCode, String)> {
    let (_, outcome, bank) = state.battle_service.attack().await.map_err(error_response)?;

    Ok(Json(AttackResponse::new(outcome, bank)))
}

/// Instantly defeat the monster without spending power (dev affordance)
#[utoipa::path(
    post,
    path = "/kokoro/monster/slay",
    responses(
        (status = 200, description = "Monster defeated", body = AttackResponse),
        (status = 404, description = "No active monster"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Monster"
)]
pub async fn slay_monster(
    State(state): State<AppState>,
) -> Result<Json<AttackResponse>, (StatusCode, String)> {
    let (_, outcome) = state.battle_service.slay().await.map_err(error_response)?;
    let bank = state.care_service.power();

    Ok(Json(AttackResponse::new(outcome, bank)))
}

/// Clear a defeated monster on return to home
#[utoipa::path(
    delete,
    path = "/kokoro/monster",
    responses(
        (status = 200, description = "Cleared flag", body = DismissResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Monster"
)]
pub async fn dismiss_monster(
    State(state): State<AppState>,
) -> Result<Json<DismissResponse>, (StatusCode, String)> {
    let cleared = state
        .battle_service
        .dismiss()
        .await
        .map_err(error_response)?;

    Ok(Json(DismissResponse { cleared }))
}

/// Stress score history (one point per generated monster)
#[utoipa::path(
    get,
    path = "/kokoro/history/stress",
    responses(
        (status = 200, description = "Stress history", body = Vec<StressRecordResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Monster"
)]
pub async fn get_stress_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<StressRecordResponse>>, (StatusCode, String)> {
    let history = state
        .battle_service
        .stress_history()
        .await
        .map_err(error_response)?;

    Ok(Json(history.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kokoro/monster", get(get_monster).delete(dismiss_monster))
        .route("/kokoro/monster/attack", post(attack_monster))
        .route("/kokoro/monster/slay", post(slay_monster))
        .route("/kokoro/history/stress", get(get_stress_history))
}
