//! Core TOML config loading: read from path or platform default.

use crate::schema::CloudConfig;
use crate::validation;
use morphcloud_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. A config that parses but fails
/// validation is logged and returned as-is.
pub fn load_from_path(path: &Path) -> Result<CloudConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: CloudConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e} (using parsed values)");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/morphcloud/config.toml`
/// On Linux: `~/.config/morphcloud/config.toml`
///
/// If the file does not exist, writes the commented template and returns defaults.
pub fn load_default() -> Result<CloudConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(CloudConfig::default())
        }
        Err(e) => Err(e),
    }
}
