//! Particle sizing and morph timing validation.

use crate::schema::CloudConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_particles(errors: &mut Vec<String>, config: &CloudConfig) {
    validate_range_f64(errors, "particles.size", config.particles.size, 0.01, 5.0);
    validate_range_f64(
        errors,
        "particles.max_pixel_ratio",
        config.particles.max_pixel_ratio,
        1.0,
        4.0,
    );
}

pub(crate) fn validate_morph(errors: &mut Vec<String>, config: &CloudConfig) {
    validate_range_f64(errors, "morph.duration", config.morph.duration, 0.1, 30.0);
    validate_range_f64(errors, "morph.interval", config.morph.interval, 0.5, 600.0);
}
