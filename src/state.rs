use crate::models::TodoStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// The one copy of the store, shared with every handler.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<TodoStore>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, store: TodoStore) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(store)),
        }
    }
}
