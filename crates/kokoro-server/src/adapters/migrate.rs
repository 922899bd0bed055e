//! Document migrations
//!
//! Older exports of the to-do document used different field names. The
//! upgrade runs once at load time, before typed deserialization, so the
//! rest of the code only ever sees the current shape.

use serde_json::{json, Map, Value};

/// Upgrade a persisted to-do document to the current shape.
///
/// Handled legacy forms: `dueTime` (renamed to `startTime`), `isPinned`
/// (renamed to `isFavorite`), and records missing `memo`, `endTime`,
/// `dueDate`, `isCompleted` or `order` (the position in the list stands in
/// for a missing `order`).
pub fn upgrade_todo_list(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| upgrade_todo_item(index, item))
                .collect(),
        ),
        other => other,
    }
}

fn upgrade_todo_item(index: usize, item: Value) -> Value {
    match item {
        Value::Object(mut map) => {
            rename_legacy(&mut map, "dueTime", "startTime");
            rename_legacy(&mut map, "isPinned", "isFavorite");

            fill_default(&mut map, "dueDate", Value::Null);
            fill_default(&mut map, "startTime", Value::Null);
            fill_default(&mut map, "endTime", Value::Null);
            fill_default(&mut map, "memo", json!(""));
            fill_default(&mut map, "isCompleted", json!(false));
            fill_default(&mut map, "isFavorite", json!(false));
            fill_default(&mut map, "order", json!(index as i64));

            Value::Object(map)
        }
        other => other,
    }
}

/// Move `legacy` to `current` unless the current name already carries a
/// value (an explicit null does not count).
fn rename_legacy(map: &mut Map<String, Value>, legacy: &str, current: &str) {
    if let Some(value) = map.remove(legacy) {
        let current_missing = matches!(map.get(current), None | Some(Value::Null));
        if current_missing && !value.is_null() {
            map.insert(current.to_string(), value);
        }
    }
}

/// Null counts as missing: the original wrote explicit nulls for absent
/// optional fields, but booleans and `memo` were simply dropped.
fn fill_default(map: &mut Map<String, Value>, field: &str, default: Value) {
    let missing = match map.get(field) {
        None => true,
        Some(Value::Null) => !default.is_null(),
        Some(_) => false,
    };
    if missing {
        map.insert(field.to_string(), default);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kokoro::ToDoItem;

    #[test]
    fn test_legacy_fields_are_renamed() {
        let legacy = json!([{
            "id": 1700000000000_i64,
            "title": "レポート提出",
            "dueDate": "2025-06-01",
            "dueTime": "15:00",
            "isPinned": true
        }]);

        let upgraded = upgrade_todo_list(legacy);
        let items: Vec<ToDoItem> = serde_json::from_value(upgraded).unwrap();
        assert_eq!(items[0].start_time.as_deref(), Some("15:00"));
        assert!(items[0].is_favorite);
        assert!(!items[0].is_completed);
        assert_eq!(items[0].memo, "");
    }

    #[test]
    fn test_missing_order_uses_list_position() {
        let legacy = json!([
            {"id": 1, "title": "a"},
            {"id": 2, "title": "b"}
        ]);

        let upgraded = upgrade_todo_list(legacy);
        let items: Vec<ToDoItem> = serde_json::from_value(upgraded).unwrap();
        assert_eq!(items[0].order, 0);
        assert_eq!(items[1].order, 1);
    }

    #[test]
    fn test_current_shape_passes_through() {
        let current = json!([{
            "id": 5, "title": "c", "dueDate": null, "startTime": "09:00",
            "endTime": null, "memo": "m", "isCompleted": true,
            "isFavorite": false, "order": 3
        }]);

        let upgraded = upgrade_todo_list(current.clone());
        assert_eq!(upgraded, current);
    }

    #[test]
    fn test_non_array_is_left_alone() {
        let junk = json!({"oops": true});
        assert_eq!(upgrade_todo_list(junk.clone()), junk);
    }
}
