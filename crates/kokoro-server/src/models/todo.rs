//! To-do list DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use kokoro::ToDoItem;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToDoItemResponse {
    pub id: i64,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub memo: String,
    pub is_completed: bool,
    pub is_favorite: bool,
    pub order: i64,
}

impl From<ToDoItem> for ToDoItemResponse {
    fn from(item: ToDoItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            due_date: item.due_date,
            start_time: item.start_time,
            end_time: item.end_time,
            memo: item.memo,
            is_completed: item.is_completed,
            is_favorite: item.is_favorite,
            order: item.order,
        }
    }
}

/// Create an item
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateToDoRequest {
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(default)]
    pub memo: String,
}

/// Edit an item's content (completion/favorite/order have their own
/// operations)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditToDoRequest {
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(default)]
    pub memo: String,
}

/// Completion toggled, with the updated power bank
#[derive(Debug, Serialize, ToSchema)]
pub struct ToggleToDoResponse {
    pub item: ToDoItemResponse,
    pub power_bank: u32,
}

/// Manual reorder: every item id in its new display order
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderToDoRequest {
    pub ids: Vec<i64>,
}
