use crate::models::{DayCell, RecentEntry, StatsResponse, TodoStore, WeekSummary};
use chrono::{Duration, NaiveDate};

/// How many days before the selected date the completed-history scan covers.
pub const RECENT_DAYS: u32 = 3;

pub fn build_stats_at(selected: NaiveDate, store: &TodoStore) -> StatsResponse {
    let mut week = Vec::with_capacity(7);
    let mut total_tasks = 0;
    let mut total_completed = 0;

    for offset in (0..7).rev() {
        let date = selected - Duration::days(offset);
        let bucket = store.tasks_for(&date_key(date));
        let total = bucket.len();
        let done = bucket.iter().filter(|task| task.completed).count();

        total_tasks += total;
        total_completed += done;

        week.push(DayCell {
            date: date.to_string(),
            done,
            total,
            ratio: percent(done, total),
        });
    }

    let summary = WeekSummary {
        completed: total_completed,
        total: total_tasks,
        rate: percent(total_completed, total_tasks),
    };

    let mut recent_completed = Vec::new();
    for offset in 1..=RECENT_DAYS {
        let date = selected - Duration::days(i64::from(offset));
        let label = day_offset_label(offset);
        for task in store.tasks_for(&date_key(date)) {
            if task.completed {
                recent_completed.push(RecentEntry {
                    days_ago: offset,
                    label: label.clone(),
                    text: task.text.clone(),
                });
            }
        }
    }

    StatsResponse {
        week,
        summary,
        recent_completed,
    }
}

fn percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((done * 100) as f64 / total as f64).round() as u32
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn day_offset_label(offset: u32) -> String {
    if offset == 1 {
        "1 day ago".to_string()
    } else {
        format!("{offset} days ago")
    }
}
