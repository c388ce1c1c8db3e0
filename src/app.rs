use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/day", get(handlers::get_day))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/add", post(handlers::add_task))
        .route("/api/toggle", post(handlers::toggle_task))
        .route("/api/delete", post(handlers::delete_task))
        .route("/api/clear-completed", post(handlers::clear_completed))
        .with_state(state)
}
