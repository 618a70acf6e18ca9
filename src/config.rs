//! Runtime configuration from environment variables
//!
//! All functions fall back to sensible defaults when env vars are not set.

use std::path::PathBuf;

/// Settings file holding the persisted key-value blob.
/// Override with `PORTAL_SETTINGS_FILE`.
pub fn settings_file() -> PathBuf {
    if let Ok(path) = std::env::var("PORTAL_SETTINGS_FILE") {
        return PathBuf::from(path);
    }
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("portal-dashboard").join("settings.json");
    }
    // Last resort: a dotfile in the working directory.
    PathBuf::from(".portal-dashboard-settings.json")
}
