//! Shared application state

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::PanelConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration record, `None` until setup completes
    pub config: Arc<RwLock<Option<PanelConfig>>>,
    /// Directory holding settings.json
    pub config_dir: PathBuf,
    /// Directory holding language catalogs
    pub lang_dir: PathBuf,
    /// Application version tag reported on the setup page
    pub version: String,
}

impl AppState {
    pub fn new(config: Option<PanelConfig>, config_dir: PathBuf, lang_dir: PathBuf) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
            lang_dir,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub async fn is_configured(&self) -> bool {
        self.config.read().await.is_some()
    }
}
