//! Camera configuration types.

use serde::{Deserialize, Serialize};

/// Perspective camera looking at the origin from `+Z`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 10-120).
    pub fov_degrees: f64,
    /// Eye distance from the origin (valid range: 1-100).
    pub distance: f64,
    pub near: f64,
    pub far: f64,
    /// Yaw rotation in radians per second (valid range: 0-5).
    pub auto_rotate_speed: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 35.0,
            distance: 16.0,
            near: 0.1,
            far: 100.0,
            auto_rotate_speed: 0.0,
        }
    }
}
