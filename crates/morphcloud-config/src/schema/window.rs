//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width in pixels (valid range: 200-8192).
    pub width: u32,
    /// Logical height in pixels (valid range: 200-8192).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "morphcloud".into(),
            width: 1280,
            height: 800,
        }
    }
}
