//! Window and camera validation.

use crate::schema::CloudConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &CloudConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 8192);
    validate_range(errors, "window.height", config.window.height, 200, 8192);
}

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &CloudConfig) {
    let camera = &config.camera;
    validate_range_f64(errors, "camera.fov_degrees", camera.fov_degrees, 10.0, 120.0);
    validate_range_f64(errors, "camera.distance", camera.distance, 1.0, 100.0);
    validate_range_f64(
        errors,
        "camera.auto_rotate_speed",
        camera.auto_rotate_speed,
        0.0,
        5.0,
    );

    if camera.near.is_nan() || camera.near <= 0.0 {
        errors.push(format!("camera.near = {} must be positive", camera.near));
    }
    if camera.far.is_nan() || camera.far <= camera.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            camera.far, camera.near
        ));
    }
}
