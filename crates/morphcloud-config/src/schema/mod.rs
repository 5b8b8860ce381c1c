//! Configuration schema types for morphcloud.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that reproduce the stock demo.

mod camera;
mod colors;
mod logging;
mod morph;
mod particles;
mod shapes;
mod window;

pub use camera::*;
pub use colors::*;
pub use logging::*;
pub use morph::*;
pub use particles::*;
pub use shapes::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub particles: ParticlesConfig,
    pub morph: MorphConfig,
    pub colors: ColorsConfig,
    pub shapes: ShapesConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
