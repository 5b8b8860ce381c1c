//! Process-wide shader inputs, kept as plain CPU data.
//!
//! The renderer copies these into its GPU uniform block every frame.

use morphcloud_common::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphUniforms {
    /// Drawable size in physical pixels (logical size × pixel ratio).
    pub resolution: [f32; 2],
    /// Elapsed seconds; phase of the ambient motion.
    pub time: f32,
    /// Global point size multiplier.
    pub size: f32,
    /// Global transition progress in `[0, 1]`.
    pub progress: f32,
    pub color_a: Rgb,
    pub color_b: Rgb,
}

impl MorphUniforms {
    pub fn new(size: f32, color_a: Rgb, color_b: Rgb) -> Self {
        Self {
            resolution: [1.0, 1.0],
            time: 0.0,
            size,
            progress: 0.0,
            color_a,
            color_b,
        }
    }

    /// Set `resolution` from a logical viewport and an already-capped pixel
    /// ratio. Zero-sized viewports (minimized windows) keep at least 1px.
    pub fn update_viewport(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.resolution = [
            (width * pixel_ratio).max(1.0),
            (height * pixel_ratio).max(1.0),
        ];
    }
}

impl Default for MorphUniforms {
    fn default() -> Self {
        Self::new(0.4, Rgb::BLACK, Rgb::BLACK)
    }
}
