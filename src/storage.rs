use crate::errors::AppError;
use crate::models::TodoStore;
use crate::normalize::{normalize_value, today_key};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/todos.json"))
}

/// Reads the data file and normalizes whatever is in it. A missing file is
/// the first-run state, not an error; anything unreadable or unparsable
/// degrades to an empty store.
pub async fn load_store(path: &Path) -> TodoStore {
    match fs::read_to_string(path).await {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(parsed) => normalize_value(&parsed, &today_key()),
            Err(err) => {
                error!("failed to parse data file: {err}");
                TodoStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => TodoStore::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            TodoStore::default()
        }
    }
}

/// Writes the whole store back after every mutation. A failed write stays
/// in memory and comes back as a 500 so the page can show it.
pub async fn persist_store(path: &Path, store: &TodoStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    if let Err(err) = fs::write(path, payload).await {
        error!("failed to write data file: {err}");
        return Err(AppError::internal(err));
    }
    Ok(())
}
