//! Shape catalog source.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapesConfig {
    /// JSON shape file. When unset the built-in catalog is used.
    pub path: Option<PathBuf>,
    /// Seed for padding and per-vertex attributes. Unset means entropy.
    pub seed: Option<u64>,
}
