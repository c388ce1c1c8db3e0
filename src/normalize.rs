use crate::models::{fresh_id, TaskRecord, TodoStore};
use chrono::Local;
use serde_json::Value;
use std::collections::BTreeMap;

pub fn today_key() -> String {
    Local::now().date_naive().to_string()
}

/// Turns whatever the data file held into a well-formed store.
///
/// Unparsable input and unrecognized top-level shapes come back as an empty
/// store; a bare array is the legacy single-list format and becomes the
/// bucket for `today_key` (legacy data carried no date of its own).
pub fn normalize_store(raw: &str, today_key: &str) -> TodoStore {
    let Ok(parsed) = serde_json::from_str::<Value>(raw) else {
        return TodoStore::default();
    };
    normalize_value(&parsed, today_key)
}

/// Same contract as [`normalize_store`], starting from already-parsed JSON.
pub fn normalize_value(parsed: &Value, today_key: &str) -> TodoStore {
    if parsed.is_array() {
        let mut todos_by_date = BTreeMap::new();
        todos_by_date.insert(today_key.to_string(), normalize_items(parsed));
        return TodoStore { todos_by_date };
    }

    let Some(by_date) = parsed.get("todosByDate").and_then(Value::as_object) else {
        return TodoStore::default();
    };

    let todos_by_date = by_date
        .iter()
        .map(|(date_key, items)| (date_key.clone(), normalize_items(items)))
        .collect();

    TodoStore { todos_by_date }
}

/// Normalizes one candidate bucket. Anything that is not an array is an
/// empty bucket; entries survive only with non-empty trimmed string text.
pub fn normalize_items(list: &Value) -> Vec<TaskRecord> {
    let Value::Array(items) = list else {
        return Vec::new();
    };

    items.iter().filter_map(normalize_item).collect()
}

fn normalize_item(item: &Value) -> Option<TaskRecord> {
    let entry = item.as_object()?;
    let text = entry.get("text")?.as_str()?.trim();
    if text.is_empty() {
        return None;
    }

    let id = entry
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(fresh_id);
    let completed = entry
        .get("completed")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    // completedAt only means something on a completed task.
    let completed_at = if completed {
        entry.get("completedAt").and_then(Value::as_i64)
    } else {
        None
    };

    Some(TaskRecord {
        id,
        text: text.to_string(),
        completed,
        completed_at,
    })
}
