//! Import configuration.
//!
//! The importer needs two pieces of environment:
//! - `app_version`: the producer/consumer compatibility gate
//! - `storage_key`: where the whole-game snapshot is persisted
//!
//! Both have sensible defaults and are overridden builder-style.

use serde::{Deserialize, Serialize};

/// Key of the persisted whole-game slot.
pub const DEFAULT_STORAGE_KEY: &str = "game";

/// Configuration for exporting and importing game state.
///
/// ## Example
///
/// ```
/// use forest_tally::core::ImportConfig;
///
/// let config = ImportConfig::default().with_app_version("2.4.0");
/// assert_eq!(config.app_version, "2.4.0");
/// assert_eq!(config.storage_key, "game");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Version stamped on exports and required (exactly) on imports.
    pub app_version: String,

    /// Key of the persisted game slot in the key-value store.
    pub storage_key: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl ImportConfig {
    /// Set the application version.
    #[must_use]
    pub fn with_app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = version.into();
        self
    }

    /// Set the storage key of the persisted game slot.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
