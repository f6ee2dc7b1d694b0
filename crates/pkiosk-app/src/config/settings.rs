//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use pkiosk_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "print-kiosk";

/// Default config location under the platform config directory
/// (e.g. `~/.config/print-kiosk/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the given path, or the default location.
///
/// A missing file is normal (first run) and yields defaults. A file that
/// exists but fails to parse also yields defaults — a kiosk must come up
/// regardless, so the problem is logged rather than fatal.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => path,
        None => {
            debug!("No config directory available, using default settings");
            return Settings::default();
        }
    };

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path.display());
            return Settings::default();
        }
        Err(e) => {
            warn!("Failed to read {}: {e}, using defaults", path.display());
            return Settings::default();
        }
    };

    match toml::from_str::<Settings>(&contents) {
        Ok(settings) => {
            info!("Loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            warn!("Invalid config at {}: {e}, using defaults", path.display());
            Settings::default()
        }
    }
}
