use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{from_json_str, DashboardError, Result};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.wahooligan.com/v1/workouts";
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_endpoint: String,
    pub per_page: u32,
    pub request_timeout_secs: u64,
    pub access_token: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            per_page: DEFAULT_PER_PAGE,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            access_token: None,
        }
    }
}

/// Leser inn config fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-config.
pub fn load_config(path: impl AsRef<Path>) -> Result<DashboardConfig> {
    let path = path.as_ref();
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        let cfg: DashboardConfig = from_json_str(&contents)?;
        log::info!(
            "config loaded from {} (endpoint={}, per_page={})",
            path.display(),
            cfg.api_endpoint,
            cfg.per_page
        );
        Ok(cfg)
    } else {
        log::warn!("config not found at {}, using defaults", path.display());
        Ok(DashboardConfig::default())
    }
}

/// Lagrer config til disk som JSON (pretty-print).
pub fn save_config(cfg: &DashboardConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(cfg).map_err(|e| DashboardError::Json {
        path: ".".to_string(),
        message: e.to_string(),
    })?;
    std::fs::write(path, json)?;
    log::info!("config saved to {}", path.display());
    Ok(())
}
