//! ToDoItem and the chronological ordering rules
//!
//! `order` is a plain sort key: mutated wholesale by manual reorder, or
//! rewritten 0..n-1 by the chronological sort. Values need not be
//! contiguous, only relatively ordered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ToDoItem - one task on the list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDoItem {
    pub id: i64,
    pub title: String,
    /// YYYY-MM-DD
    pub due_date: Option<NaiveDate>,
    /// "HH:mm"
    pub start_time: Option<String>,
    /// "HH:mm"
    pub end_time: Option<String>,
    pub memo: String,
    pub is_completed: bool,
    pub is_favorite: bool,
    pub order: i64,
}

impl ToDoItem {
    /// Create a fresh item. `id` doubles as the initial `order` so new
    /// items land at the end of the list.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: String,
        due_date: Option<NaiveDate>,
        start_time: Option<String>,
        end_time: Option<String>,
        memo: String,
    ) -> Self {
        Self {
            id,
            title,
            due_date,
            start_time,
            end_time,
            memo,
            is_completed: false,
            is_favorite: false,
            order: id,
        }
    }
}

/// Sort key: items without a due date sort after every dated item; a
/// missing start time counts as midnight.
fn schedule_key(item: &ToDoItem) -> (bool, Option<NaiveDate>, String) {
    match item.due_date {
        Some(date) => (
            false,
            Some(date),
            item.start_time.clone().unwrap_or_else(|| "00:00".to_string()),
        ),
        None => (true, None, String::new()),
    }
}

/// Chronological sort: favorites before non-favorites, each group ascending
/// by (due date, start time). Stable, then rewrites `order` as the rank.
pub fn sort_by_schedule(items: &mut [ToDoItem]) {
    items.sort_by_key(|item| (!item.is_favorite, schedule_key(item)));
    for (rank, item) in items.iter_mut().enumerate() {
        item.order = rank as i64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, due: Option<&str>, start: Option<&str>, favorite: bool) -> ToDoItem {
        let mut todo = ToDoItem::new(
            id,
            format!("task-{}", id),
            due.map(|d| d.parse().unwrap()),
            start.map(|s| s.to_string()),
            None,
            String::new(),
        );
        todo.is_favorite = favorite;
        todo
    }

    #[test]
    fn test_favorites_precede_everything() {
        let mut items = vec![
            item(1, Some("2025-06-01"), None, false),
            item(2, None, None, true),
            item(3, Some("2025-06-02"), None, true),
        ];
        sort_by_schedule(&mut items);
        let ids: Vec<i64> = items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_dateless_items_sort_last() {
        let mut items = vec![
            item(1, None, None, false),
            item(2, Some("2025-12-31"), None, false),
            item(3, Some("2025-01-01"), None, false),
        ];
        sort_by_schedule(&mut items);
        let ids: Vec<i64> = items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_start_time_breaks_same_day_ties() {
        let mut items = vec![
            item(1, Some("2025-06-01"), Some("14:00"), false),
            item(2, Some("2025-06-01"), Some("09:30"), false),
            item(3, Some("2025-06-01"), None, false),
        ];
        sort_by_schedule(&mut items);
        let ids: Vec<i64> = items.iter().map(|t| t.id).collect();
        // Missing start time counts as 00:00
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_order_rewritten_as_rank() {
        let mut items = vec![
            item(10, Some("2025-06-02"), None, false),
            item(20, Some("2025-06-01"), None, false),
        ];
        sort_by_schedule(&mut items);
        assert_eq!(items[0].order, 0);
        assert_eq!(items[1].order, 1);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut items = vec![
            item(1, Some("2025-06-01"), Some("09:00"), false),
            item(2, Some("2025-06-01"), Some("09:00"), false),
        ];
        sort_by_schedule(&mut items);
        let ids: Vec<i64> = items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_legacy_document_round_trip() {
        let json = r#"{"id":1718000000000,"title":"買い物","dueDate":"2025-06-01",
            "startTime":"10:00","endTime":null,"memo":"","isCompleted":false,
            "isFavorite":true,"order":0}"#;
        let todo: ToDoItem = serde_json::from_str(json).unwrap();
        assert!(todo.is_favorite);
        assert_eq!(todo.start_time.as_deref(), Some("10:00"));
    }
}
