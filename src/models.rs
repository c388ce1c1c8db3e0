use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One todo entry. `completed_at` is a millisecond Unix timestamp and is
/// only ever present while `completed` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub text: String,
    pub completed: bool,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<i64>,
}

impl TaskRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: fresh_id(),
            text: text.into(),
            completed: false,
            completed_at: None,
        }
    }
}

pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Day buckets keyed by local-date strings (`YYYY-MM-DD`), newest task first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TodoStore {
    #[serde(rename = "todosByDate")]
    pub todos_by_date: BTreeMap<String, Vec<TaskRecord>>,
}

impl TodoStore {
    pub fn tasks_for(&self, date_key: &str) -> &[TaskRecord] {
        self.todos_by_date
            .get(date_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn remaining(&self, date_key: &str) -> usize {
        self.tasks_for(date_key)
            .iter()
            .filter(|task| !task.completed)
            .count()
    }

    /// Prepends a fresh task. Whitespace-only text is rejected without
    /// touching the bucket.
    pub fn add(&mut self, date_key: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        let bucket = self.todos_by_date.entry(date_key.to_string()).or_default();
        bucket.insert(0, TaskRecord::new(text));
        true
    }

    /// Flips `completed` on the matching task, stamping `completed_at` on
    /// the way up and clearing it on the way down. Unknown ids are a no-op.
    pub fn toggle(&mut self, date_key: &str, id: &str, now_ms: i64) -> bool {
        let Some(bucket) = self.todos_by_date.get_mut(date_key) else {
            return false;
        };
        let Some(task) = bucket.iter_mut().find(|task| task.id == id) else {
            return false;
        };

        task.completed = !task.completed;
        task.completed_at = task.completed.then_some(now_ms);
        true
    }

    pub fn delete(&mut self, date_key: &str, id: &str) -> bool {
        let Some(bucket) = self.todos_by_date.get_mut(date_key) else {
            return false;
        };
        let before = bucket.len();
        bucket.retain(|task| task.id != id);
        bucket.len() != before
    }

    pub fn clear_completed(&mut self, date_key: &str) {
        if let Some(bucket) = self.todos_by_date.get_mut(date_key) {
            bucket.retain(|task| !task.completed);
        }
    }
}

/// Task-list filter, mirroring the three buttons on the page. Anything
/// unrecognized reads as `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("active") => Self::Active,
            Some("completed") => Self::Completed,
            _ => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    pub fn keeps(self, task: &TaskRecord) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub date: Option<String>,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TaskRefRequest {
    pub date: Option<String>,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ClearCompletedRequest {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: Option<String>,
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub date: String,
    pub filter: &'static str,
    pub tasks: Vec<TaskRecord>,
    pub remaining: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct DayCell {
    pub date: String,
    pub done: usize,
    pub total: usize,
    pub ratio: u32,
}

#[derive(Debug, Serialize)]
pub struct WeekSummary {
    pub completed: usize,
    pub total: usize,
    pub rate: u32,
}

#[derive(Debug, Serialize)]
pub struct RecentEntry {
    pub days_ago: u32,
    pub label: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub week: Vec<DayCell>,
    pub summary: WeekSummary,
    pub recent_completed: Vec<RecentEntry>,
}
