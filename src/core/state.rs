// Application state (AppState)

use crate::core::config::Config;
use crate::security::session::signing_key;
use crate::stores::student_store::StudentStore;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use std::sync::Arc;

/// Shared application state
///
/// Cloned into every request; the heavy parts sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Roster file
    pub store: Arc<StudentStore>,

    /// Configuration
    pub config: Arc<Config>,

    /// Signs the session and flash cookies
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = Arc::new(StudentStore::new(config.storage.students_file.clone()));
        let cookie_key = signing_key(&config.auth.secret_key);

        Self {
            store,
            config: Arc::new(config),
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
