//! The uniform block uploaded once per frame.
//!
//! `GpuUniforms` mirrors the WGSL `Uniforms` struct in `shaders/cloud.wgsl`.

use morphcloud_common::Rgb;
use morphcloud_core::MorphUniforms;

use crate::camera::matrix::{Mat4, IDENTITY};

/// GPU-side uniform buffer matching the WGSL `Uniforms` struct.
///
/// Layout: 2 × mat4 + 12 × f32 + 2 × vec4 = 192 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuUniforms {
    /// World-to-view matrix (column-major), including the model yaw.
    pub view: Mat4,
    /// View-to-clip matrix (column-major).
    pub projection: Mat4,

    /// Drawable size in physical pixels.
    pub resolution: [f32; 2],
    /// Elapsed seconds.
    pub time: f32,
    /// Global point size multiplier.
    pub size: f32,

    /// Global transition progress.
    pub progress: f32,
    pub _pad: [f32; 3],

    /// Blend endpoint A, linear RGB + unused alpha.
    pub color_a: [f32; 4],
    /// Blend endpoint B, linear RGB + unused alpha.
    pub color_b: [f32; 4],
}

impl GpuUniforms {
    pub fn new() -> Self {
        Self {
            view: IDENTITY,
            projection: IDENTITY,
            resolution: [1.0, 1.0],
            time: 0.0,
            size: 0.0,
            progress: 0.0,
            _pad: [0.0; 3],
            color_a: [0.0, 0.0, 0.0, 1.0],
            color_b: [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Copy the cloud's per-frame state. Colors are converted to linear.
    pub fn update_morph(&mut self, morph: &MorphUniforms) {
        self.resolution = morph.resolution;
        self.time = morph.time;
        self.size = morph.size;
        self.progress = morph.progress;
        self.color_a = linear_rgba(morph.color_a);
        self.color_b = linear_rgba(morph.color_b);
    }

    pub fn update_camera(&mut self, view: Mat4, projection: Mat4) {
        self.view = view;
        self.projection = projection;
    }
}

impl Default for GpuUniforms {
    fn default() -> Self {
        Self::new()
    }
}

fn linear_rgba(color: Rgb) -> [f32; 4] {
    let c = color.to_linear();
    [c.r, c.g, c.b, 1.0]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_size_is_192_bytes() {
        assert_eq!(std::mem::size_of::<GpuUniforms>(), 192);
    }

    #[test]
    fn uniforms_alignment_is_4_bytes() {
        assert_eq!(std::mem::align_of::<GpuUniforms>(), 4);
    }

    #[test]
    fn field_offsets_match_wgsl() {
        assert_eq!(std::mem::offset_of!(GpuUniforms, projection), 64);
        assert_eq!(std::mem::offset_of!(GpuUniforms, resolution), 128);
        assert_eq!(std::mem::offset_of!(GpuUniforms, time), 136);
        assert_eq!(std::mem::offset_of!(GpuUniforms, size), 140);
        assert_eq!(std::mem::offset_of!(GpuUniforms, progress), 144);
        assert_eq!(std::mem::offset_of!(GpuUniforms, color_a), 160);
        assert_eq!(std::mem::offset_of!(GpuUniforms, color_b), 176);
    }

    #[test]
    fn update_morph_copies_state() {
        let mut morph = MorphUniforms::new(0.4, Rgb::new(1.0, 0.0, 0.0), Rgb::BLACK);
        morph.update_viewport(800.0, 600.0, 2.0);
        morph.time = 3.5;
        morph.progress = 0.25;

        let mut u = GpuUniforms::new();
        u.update_morph(&morph);
        assert_eq!(u.resolution, [1600.0, 1200.0]);
        assert!((u.time - 3.5).abs() < f32::EPSILON);
        assert!((u.size - 0.4).abs() < f32::EPSILON);
        assert!((u.progress - 0.25).abs() < f32::EPSILON);
        assert!((u.color_a[0] - 1.0).abs() < 1e-6);
        assert!(u.color_b[..3].iter().all(|c| c.abs() < 1e-6));
    }

    #[test]
    fn colors_are_uploaded_linear() {
        let morph = MorphUniforms {
            color_a: Rgb::new(0.5, 0.5, 0.5),
            ..MorphUniforms::default()
        };
        let mut u = GpuUniforms::new();
        u.update_morph(&morph);
        assert!(u.color_a[0] < 0.5);
        assert!((u.color_a[3] - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn bytemuck_cast_works() {
        let u = GpuUniforms::new();
        let bytes: &[u8] = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 192);
    }
}
