//! morphcloud configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use morphcloud_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{CloudConfig, CONFIG_SCHEMA_VERSION};

use morphcloud_common::{ConfigError, Rgb};
use std::path::Path;

/// Load config from `path`, or from the platform default location when
/// `path` is `None`, and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<CloudConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &CloudConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

/// Parse a hex color from config, falling back to `fallback` with a warning.
pub fn parse_color(name: &str, value: &str, fallback: Rgb) -> Rgb {
    Rgb::from_hex(value).unwrap_or_else(|| {
        tracing::warn!("{name} = {value:?} is not a valid color, using {}", fallback.to_hex());
        fallback
    })
}
