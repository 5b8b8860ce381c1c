//! Point and background colors.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Color of points whose noise value is 0.
    pub color_a: String,
    /// Color of points whose noise value is 1.
    pub color_b: String,
    /// Background clear color.
    pub clear: String,
    /// Pick new random colors on every automatic morph.
    pub randomize: bool,
    /// Seconds a color change takes to blend in (valid range: 0-30).
    pub transition: f64,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            color_a: "#ff7300".into(),
            color_b: "#0091ff".into(),
            clear: "#160920".into(),
            randomize: true,
            transition: 2.5,
        }
    }
}
