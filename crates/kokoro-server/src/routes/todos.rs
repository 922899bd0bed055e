//! To-Do Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::models::{
    CreateToDoRequest, EditToDoRequest, ReorderToDoRequest, ToDoItemResponse, ToggleToDoResponse,
};
use crate::routes::error_response;
use crate::AppState;

/// List items in display order
#[utoipa::path(
    get,
    path = "/kokoro/todos",
    responses(
        (status = 200, description = "To-do list", body = Vec<ToDoItemResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "ToDo"
)]
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<ToDoItemResponse>>, (StatusCode, String)> {
    let items = state.todo_service.list().await.map_err(error_response)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Create an item
#[utoipa::path(
    post,
    path = "/kokoro/todos",
    request_body = CreateToDoRequest,
    responses(
        (status = 200, description = "Item created", body = ToDoItemResponse),
        (status = 400, description = "Empty title"),
        (status = 500, description = "Internal server error")
    ),
    tag = "ToDo"
)]
pub async fn create_todo(
    State(state): State<AppState>,
    Json(payload): Json<CreateToDoRequest>,
) -> Result<Json<ToDoItemResponse>, (StatusCode, String)> {
    let item = state
        .todo_service
        .add(
            payload.title,
            payload.due_date,
            payload.start_time,
            payload.end_time,
            payload.memo,
        )
        .await
        .map_err(error_response)?;

    Ok(Json(item.into()))
}

/// Edit an item's content
#[utoipa::path(
    put,
    path = "/kokoro/todos/{id}",
    params(("id" = i64, Path, description = "Item id")),
    request_body = EditToDoRequest,
    responses(
        (status = 200, description = "Item updated", body = ToDoItemResponse),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "ToDo"
)]
pub async fn edit_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EditToDoRequest>,
) -> Result<Json<ToDoItemResponse>, (StatusCode, String)> {
    let item = state
        .todo_service
        .edit(
            id,
            payload.title,
            payload.due_date,
            payload.start_time,
            payload.end_time,
            payload.memo,
        )
        .await
        .map_err(error_response)?;

    Ok(Json(item.into()))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/kokoro/todos/{id}",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted"),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "ToDo"
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let deleted = state
        .todo_service
        .delete(id)
        .await
        .map_err(error_response)?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "To-do item not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "To-do item deleted"
    })))
}

/// Toggle completion (awards or revokes the bonus)
#[utoipa::path(
    post,
    path = "/kokoro/todos/{id}/toggle",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Completion toggled", body = ToggleToDoResponse),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "ToDo"
)]
pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ToggleToDoResponse>, (StatusCode, String)> {
    let (item, power_bank) = state.todo_service.toggle(id).await.map_err(error_response)?;

    Ok(Json(ToggleToDoResponse {
        item: item.into(),
        power_bank,
    }))
}

/// Toggle favorite
#[utoipa::path(
    post,
    path = "/kokoro/todos/{id}/favorite",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Favorite toggled", body = ToDoItemResponse),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "ToDo"
)]
pub async fn favorite_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ToDoItemResponse>, (StatusCode, String)> {
    let item = state
        .todo_service
        .toggle_favorite(id)
        .await
        .map_err(error_response)?;

    Ok(Json(item.into()))
}

/// Manual reorder
#[utoipa::path(
    put,
    path = "/kokoro/todos/order",
    request_body = ReorderToDoRequest,
    responses(
        (status = 200, description = "Reordered list", body = Vec<ToDoItemResponse>),
        (status = 404, description = "Unknown item id"),
        (status = 500, description = "Internal server error")
    ),
    tag = "ToDo"
)]
pub async fn reorder_todos(
    State(state): State<AppState>,
    Json(payload): Json<ReorderToDoRequest>,
) -> Result<Json<Vec<ToDoItemResponse>>, (StatusCode, String)> {
    let items = state
        .todo_service
        .reorder(&payload.ids)
        .await
        .map_err(error_response)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Chronological sort (favorites first)
#[utoipa::path(
    post,
    path = "/kokoro/todos/sort",
    responses(
        (status = 200, description = "Sorted list", body = Vec<ToDoItemResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "ToDo"
)]
pub async fn sort_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<ToDoItemResponse>>, (StatusCode, String)> {
    let items = state
        .todo_service
        .sort_by_date()
        .await
        .map_err(error_response)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kokoro/todos", get(list_todos).post(create_todo))
        .route("/kokoro/todos/order", put(reorder_todos))
        .route("/kokoro/todos/sort", post(sort_todos))
        .route(
            "/kokoro/todos/:id",
            put(edit_todo).delete(delete_todo),
        )
        .route("/kokoro/todos/:id/toggle", post(toggle_todo))
        .route("/kokoro/todos/:id/favorite", post(favorite_todo))
}
