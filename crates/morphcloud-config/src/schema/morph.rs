//! Morph timing and auto-cycling.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Seconds for global progress to ramp from 0 to 1 (valid range: 0.1-30).
    pub duration: f64,
    /// Automatically morph to a random other shape every `interval` seconds.
    pub auto_cycle: bool,
    /// Seconds between automatic morphs (valid range: 0.5-600).
    pub interval: f64,
    /// Shape shown at startup. Checked against the catalog once it is loaded.
    pub initial_shape: usize,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            duration: 2.5,
            auto_cycle: true,
            interval: 4.0,
            initial_shape: 0,
        }
    }
}
