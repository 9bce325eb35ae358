//! Preference commands.

use crate::error::CommandError;
use crate::state::AppState;

/// Current dark-mode flag.
pub async fn dark_mode(state: &AppState) -> bool {
    state.preferences.lock().await.dark_mode()
}

/// Flip dark mode, persist it, and return the new value.
pub async fn toggle_dark_mode(state: &AppState) -> Result<bool, CommandError> {
    let enabled = state.preferences.lock().await.toggle_dark_mode()?;
    tracing::info!("Dark mode {}", if enabled { "enabled" } else { "disabled" });
    Ok(enabled)
}
