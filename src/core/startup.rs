use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::state::AppState;

/// Boot-time checks: data directory, current roster size, insecure defaults
pub async fn prepare(state: &AppState) -> Result<()> {
    state
        .store
        .ensure_parent_dir()
        .await
        .context("Failed to prepare roster storage")?;

    let students = state.store.load().await;

    info!(
        path = %state.store.path().display(),
        students = students.len(),
        "Roster loaded"
    );

    let insecure = state.config.insecure_defaults();
    if !insecure.is_empty() {
        warn!(
            settings = ?insecure,
            "Using built-in fallback credentials; set ADMIN_USERNAME, ADMIN_PASSWORD and SECRET_KEY"
        );
    }

    Ok(())
}
