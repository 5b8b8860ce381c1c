//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod animation;
mod colors;
mod helpers;
mod view;


use crate::schema::CloudConfig;
use morphcloud_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CloudConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    view::validate_window(&mut errors, config);
    view::validate_camera(&mut errors, config);
    animation::validate_particles(&mut errors, config);
    animation::validate_morph(&mut errors, config);
    colors::validate_colors(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
