use crate::errors::AppError;
use crate::models::{
    AddRequest, ClearCompletedRequest, DayQuery, DayResponse, Filter, StatsQuery, StatsResponse,
    TaskRefRequest, TodoStore,
};
use crate::state::AppState;
use crate::stats::build_stats_at;
use crate::storage::persist_store;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate, Utc};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_string();
    let store = state.store.lock().await;
    let remaining = store.remaining(&date);
    Html(render_index(&date, remaining))
}

pub async fn get_day(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<DayResponse>, AppError> {
    let date = selected_date(query.date.as_deref())?;
    let filter = Filter::parse(query.filter.as_deref());
    let store = state.store.lock().await;

    Ok(Json(day_view(&store, &date.to_string(), filter)))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let date = selected_date(query.date.as_deref())?;
    let store = state.store.lock().await;

    Ok(Json(build_stats_at(date, &store)))
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<AddRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = selected_date(payload.date.as_deref())?.to_string();
    if payload.text.trim().is_empty() {
        return Err(AppError::bad_request("task text must not be empty"));
    }

    let mut store = state.store.lock().await;
    store.add(&date, &payload.text);
    persist_store(&state.data_path, &store).await?;

    Ok(Json(day_view(&store, &date, Filter::All)))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskRefRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = selected_date(payload.date.as_deref())?.to_string();
    let mut store = state.store.lock().await;
    store.toggle(&date, &payload.id, Utc::now().timestamp_millis());
    persist_store(&state.data_path, &store).await?;

    Ok(Json(day_view(&store, &date, Filter::All)))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskRefRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = selected_date(payload.date.as_deref())?.to_string();
    let mut store = state.store.lock().await;
    store.delete(&date, &payload.id);
    persist_store(&state.data_path, &store).await?;

    Ok(Json(day_view(&store, &date, Filter::All)))
}

pub async fn clear_completed(
    State(state): State<AppState>,
    Json(payload): Json<ClearCompletedRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = selected_date(payload.date.as_deref())?.to_string();
    let mut store = state.store.lock().await;
    store.clear_completed(&date);
    persist_store(&state.data_path, &store).await?;

    Ok(Json(day_view(&store, &date, Filter::All)))
}

fn day_view(store: &TodoStore, date_key: &str, filter: Filter) -> DayResponse {
    let bucket = store.tasks_for(date_key);
    let tasks = bucket
        .iter()
        .filter(|task| filter.keeps(task))
        .cloned()
        .collect();

    DayResponse {
        date: date_key.to_string(),
        filter: filter.as_str(),
        tasks,
        remaining: store.remaining(date_key),
        total: bucket.len(),
    }
}

/// Absent or empty means today, like the page's date input; anything else
/// must be a real `YYYY-MM-DD` date since the stats windows do arithmetic
/// on it.
fn selected_date(raw: Option<&str>) -> Result<NaiveDate, AppError> {
    match raw {
        None | Some("") => Ok(Local::now().date_naive()),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD")),
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
