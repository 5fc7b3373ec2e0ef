/// Configuration persistence on top of chrome.storage.local

use crate::config::NoteConfig;
use crate::error::StorageError;
use crate::settings::STORAGE_KEY;
use serde_json::Value;

/// Key-value storage holding JSON records.
///
/// `read` returns `None` when nothing is stored under `key`.
#[allow(async_fn_in_trait)]
pub trait ConfigStore {
    async fn read(&self, key: &str) -> Result<Option<Value>, StorageError>;
    async fn write(&self, key: &str, value: Value) -> Result<(), StorageError>;
}

/// Load the configuration, falling back to defaults.
///
/// Never fails: a missing record, an unreadable store or a malformed record
/// all produce a complete config.
pub async fn load_config<S: ConfigStore>(store: &S) -> NoteConfig {
    match store.read(STORAGE_KEY).await {
        Ok(Some(stored)) => NoteConfig::from_stored(&stored),
        Ok(None) => NoteConfig::default(),
        Err(e) => {
            log::warn!("Failed to read config, using defaults: {}", e);
            NoteConfig::default()
        }
    }
}

/// Replace the stored configuration wholesale
pub async fn save_config<S: ConfigStore>(store: &S, config: &NoteConfig) -> Result<(), StorageError> {
    let value = serde_json::to_value(config).map_err(|e| StorageError::Encode(e.to_string()))?;
    store.write(STORAGE_KEY, value).await?;
    log::info!("Saved config for endpoint {}", config.endpoint);
    Ok(())
}
