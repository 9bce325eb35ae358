//! Application state management.

use starchart_catalog::{CatalogSet, ResourceStore};
use starchart_client::{CatalogSource, HttpCatalogClient};
use starchart_core::{AppConfig, PreferenceStore, ResourceKind, Result, StarchartError};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Application state shared across all commands.
///
/// Built once at startup and passed by reference; there is no global instance.
pub struct AppState {
    /// Configuration the state was built from
    pub config: AppConfig,

    /// One list/detail store per resource kind
    pub catalog: CatalogSet,

    /// Durable client preferences (dark mode)
    pub preferences: Mutex<PreferenceStore>,

    /// Resource kind the list view currently shows
    active: RwLock<ResourceKind>,
}

impl AppState {
    /// Build state from configuration: HTTP client, stores and preferences.
    ///
    /// # Errors
    /// Fails when the configuration is invalid, the HTTP client cannot be
    /// built, the data directory cannot be determined, or the preference file
    /// is corrupt.
    pub fn bootstrap(config: AppConfig) -> Result<Self> {
        config.validate()?;

        let client = HttpCatalogClient::from_config(&config.api)
            .map_err(|e| StarchartError::Internal(e.to_string()))?;

        let prefs_path = config.preferences_path()?;
        let preferences = PreferenceStore::open(&prefs_path)?;

        tracing::info!("Catalog API: {}", client.base_url());
        tracing::info!("Preferences: {}", prefs_path.display());

        Ok(Self::with_source(config, Arc::new(client), preferences))
    }

    /// Build state around an explicit source, e.g. an in-memory fixture.
    pub fn with_source(
        config: AppConfig,
        source: Arc<dyn CatalogSource>,
        preferences: PreferenceStore,
    ) -> Self {
        tracing::debug!(
            "Restored dark mode: {} (source {})",
            preferences.dark_mode(),
            source.source_id()
        );
        Self {
            config,
            catalog: CatalogSet::new(source),
            preferences: Mutex::new(preferences),
            active: RwLock::new(ResourceKind::People),
        }
    }

    /// Resource kind currently shown in the list view.
    pub async fn active_resource(&self) -> ResourceKind {
        *self.active.read().await
    }

    /// Switch the list view to `kind`.
    pub async fn set_active_resource(&self, kind: ResourceKind) {
        *self.active.write().await = kind;
    }

    /// Store behind the list view.
    pub async fn active_store(&self) -> &ResourceStore {
        self.catalog.store(self.active_resource().await)
    }

    /// Store for `kind`.
    pub fn store(&self, kind: ResourceKind) -> &ResourceStore {
        self.catalog.store(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use starchart_client::StaticSource;
    use starchart_core::PreferenceError;
    use tempfile::TempDir;

    fn state_in(dir: &TempDir) -> AppState {
        let preferences = PreferenceStore::open(dir.path().join("preferences.json")).unwrap();
        AppState::with_source(AppConfig::default(), Arc::new(StaticSource::new()), preferences)
    }

    #[tokio::test]
    async fn test_defaults_to_people() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);
        assert_eq!(state.active_resource().await, ResourceKind::People);
        assert_eq!(state.active_store().await.kind(), ResourceKind::People);
    }

    #[tokio::test]
    async fn test_set_active_resource() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);
        state.set_active_resource(ResourceKind::Films).await;
        assert_eq!(state.active_store().await.kind(), ResourceKind::Films);
        assert_eq!(state.store(ResourceKind::Planets).kind(), ResourceKind::Planets);
    }

    #[tokio::test]
    async fn test_bootstrap_uses_data_dir_override() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.general.data_dir = Some(dir.path().to_path_buf());
        config.api.base_url = "http://127.0.0.1:9/api".to_string();

        let state = AppState::bootstrap(config).unwrap();
        let prefs = state.preferences.lock().await;
        assert_eq!(prefs.path(), dir.path().join("preferences.json"));
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_corrupt_preferences() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("preferences.json"), "not json").unwrap();
        let mut config = AppConfig::default();
        config.general.data_dir = Some(dir.path().to_path_buf());

        let err = AppState::bootstrap(config).err().unwrap();
        assert!(matches!(
            err,
            StarchartError::Preference(PreferenceError::Corrupt { .. })
        ));
        assert_eq!(CommandError::from(err).code, "PREFERENCES_CORRUPT");
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.general.data_dir = Some(dir.path().to_path_buf());
        config.api.timeout_secs = 0;

        let err = AppState::bootstrap(config).err().unwrap();
        assert!(matches!(err, StarchartError::Config(_)));
        assert_eq!(CommandError::from(err).code, "CONFIG_ERROR");
        assert!(!dir.path().join("preferences.json").exists());
    }
}
