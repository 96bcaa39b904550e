//! The persisted configuration record (`settings.json`).
//!
//! Created once by the first-run setup wizard and loaded at every start.
//! Absence of the file is the signal that the panel is unconfigured.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::lang::DEFAULT_LANG;

pub const SETTINGS_FILE: &str = "settings.json";
pub const APP_NAME: &str = "KLUCON PRIME";

const INIT_ATTEMPTS: u32 = 3;
const INIT_BACKOFF: Duration = Duration::from_millis(500);

/// Baseline configuration record created by the setup wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    pub system: SystemSection,
    pub admin: AdminSection,
    pub modules: ModuleFlags,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSection {
    pub app_name: String,
    pub version: String,
    pub lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSection {
    pub username: String,
    /// Salted hash, never the plain password
    pub password: String,
}

/// Placeholder feature toggles; no module is implemented yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleFlags {
    pub movies: bool,
    pub series: bool,
}

impl PanelConfig {
    /// Build the baseline record for a freshly set-up panel.
    pub fn bootstrap(username: &str, password_hash: &str, version: &str) -> Self {
        Self {
            system: SystemSection {
                app_name: APP_NAME.to_string(),
                version: version.to_string(),
                lang: DEFAULT_LANG.to_string(),
            },
            admin: AdminSection {
                username: username.to_string(),
                password: password_hash.to_string(),
            },
            modules: ModuleFlags::default(),
        }
    }

    /// Load the record from `config_dir`, `None` when the panel is unconfigured.
    pub fn load(config_dir: &Path) -> Result<Option<Self>> {
        let path = config_dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)?;
        let config = serde_json::from_str(&raw)
            .map_err(|e| AppError::config(format!("malformed {SETTINGS_FILE}: {e}")))?;
        Ok(Some(config))
    }

    pub fn store(&self, config_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(config_dir)?;
        let raw = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::config(e.to_string()))?;
        std::fs::write(config_dir.join(SETTINGS_FILE), raw)?;
        Ok(())
    }
}

/// Idempotent storage initialization, run once at process start.
///
/// Bounded retries with a fixed backoff cover the config directory living on
/// storage that is still coming up when the service starts at boot.
pub async fn init_storage(config_dir: &Path) -> Result<Option<PanelConfig>> {
    let mut attempt = 1;
    loop {
        match try_init(config_dir) {
            Ok(config) => return Ok(config),
            Err(err) if attempt < INIT_ATTEMPTS => {
                tracing::warn!(attempt, %err, "storage init failed, retrying");
                tokio::time::sleep(INIT_BACKOFF).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

fn try_init(config_dir: &Path) -> Result<Option<PanelConfig>> {
    std::fs::create_dir_all(config_dir)?;
    PanelConfig::load(config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn round_trips_through_settings_file() {
        let tmp = TempDir::new().unwrap();
        let config = PanelConfig::bootstrap("admin", "salt$deadbeef", "0.1.0");
        config.store(tmp.path()).unwrap();

        let loaded = PanelConfig::load(tmp.path()).unwrap().unwrap();
        assert_eq!(loaded.system.app_name, APP_NAME);
        assert_eq!(loaded.system.lang, DEFAULT_LANG);
        assert_eq!(loaded.admin.username, "admin");
        assert_eq!(loaded.admin.password, "salt$deadbeef");
        assert!(!loaded.modules.movies);
        assert!(!loaded.modules.series);
    }

    #[test]
    fn missing_file_means_unconfigured() {
        let tmp = TempDir::new().unwrap();
        assert!(PanelConfig::load(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(SETTINGS_FILE), "{not json").unwrap();
        assert!(PanelConfig::load(tmp.path()).is_err());
    }

    #[tokio::test]
    async fn init_storage_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("config");
        let loaded = init_storage(&dir).await.unwrap();
        assert!(loaded.is_none());
        assert!(dir.is_dir());
    }
}
