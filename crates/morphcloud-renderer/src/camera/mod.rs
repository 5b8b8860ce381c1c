//! Perspective camera looking at the origin, with optional slow yaw.

pub mod matrix;

use morphcloud_config::schema::CameraConfig;

use matrix::{look_at, mul, perspective, rotate_y, Mat4};

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub distance: f32,
    pub near: f32,
    pub far: f32,
    /// Yaw speed in radians per second. 0 keeps the view fixed.
    pub auto_rotate_speed: f32,
    yaw: f32,
}

impl OrbitCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            fov_y: (config.fov_degrees as f32).to_radians(),
            distance: config.distance as f32,
            near: config.near as f32,
            far: config.far as f32,
            auto_rotate_speed: config.auto_rotate_speed as f32,
            yaw: 0.0,
        }
    }

    /// Advance the auto-rotation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.yaw = (self.yaw + self.auto_rotate_speed * dt) % std::f32::consts::TAU;
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn eye(&self) -> [f32; 3] {
        [0.0, 0.0, self.distance]
    }

    /// Model yaw folded into the view transform.
    pub fn view(&self) -> Mat4 {
        let camera = look_at(self.eye(), [0.0; 3], [0.0, 1.0, 0.0]);
        mul(&camera, &rotate_y(self.yaw))
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        perspective(self.fov_y, aspect.max(1e-3), self.near, self.far)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::matrix::transform_point;
    use super::*;

    #[test]
    fn default_camera_matches_config() {
        let cam = OrbitCamera::default();
        assert!((cam.fov_y - 35.0_f32.to_radians()).abs() < 1e-6);
        assert!((cam.distance - 16.0).abs() < f32::EPSILON);
        assert_eq!(cam.eye(), [0.0, 0.0, 16.0]);
    }

    #[test]
    fn origin_sits_distance_in_front() {
        let cam = OrbitCamera::default();
        let p = transform_point(&cam.view(), [0.0, 0.0, 0.0, 1.0]);
        assert!(p[0].abs() < 1e-5);
        assert!(p[1].abs() < 1e-5);
        assert!((p[2] + 16.0).abs() < 1e-5);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let cam = OrbitCamera::default();
        let view = transform_point(&cam.view(), [0.0, 0.0, 0.0, 1.0]);
        let clip = transform_point(&cam.projection(16.0 / 10.0), view);
        assert!((clip[0] / clip[3]).abs() < 1e-5);
        assert!((clip[1] / clip[3]).abs() < 1e-5);
        let depth = clip[2] / clip[3];
        assert!((0.0..=1.0).contains(&depth));
    }

    #[test]
    fn zero_speed_never_rotates() {
        let mut cam = OrbitCamera::default();
        cam.update(10.0);
        assert_eq!(cam.yaw(), 0.0);
    }

    #[test]
    fn auto_rotate_turns_the_cloud() {
        let mut cam = OrbitCamera::default();
        cam.auto_rotate_speed = std::f32::consts::FRAC_PI_2;
        cam.update(1.0);
        // A point on +X swings to -Z in world space, i.e. farther away.
        let p = transform_point(&cam.view(), [1.0, 0.0, 0.0, 1.0]);
        assert!(p[0].abs() < 1e-5);
        assert!((p[2] + 17.0).abs() < 1e-4);
    }
}
