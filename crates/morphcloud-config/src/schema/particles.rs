//! Point sprite sizing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    /// Global size multiplier fed to the shader (valid range: 0.01-5.0).
    pub size: f64,
    /// Upper bound applied to the display scale factor (valid range: 1-4).
    pub max_pixel_ratio: f64,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            size: 0.4,
            max_pixel_ratio: 2.0,
        }
    }
}
