//! Morphing point cloud core.
//!
//! Load-time geometry normalization, the morph state machine, tweened colors,
//! uniform state, and a CPU reference of the per-vertex transition program.
//! Nothing here touches the GPU; the renderer consumes the buffers and
//! uniforms exposed by [`MorphableCloud`].

pub mod cloud;
pub mod color_state;
pub mod geometry;
pub mod math;
pub mod morph;
pub mod noise;
pub mod scheduler;
pub mod shapes;
pub mod transition;
pub mod tween;
pub mod uniforms;

pub use cloud::{CloudSettings, CloudSlot, MorphableCloud};
pub use color_state::{ColorSlot, ColorState};
pub use geometry::{normalize, NormalizedPositions, PerVertexAttributes, PointCloud, ShapeSet};
pub use math::Point3;
pub use morph::{AttributeBindings, MorphState, Morphable};
pub use scheduler::{pick_target, random_color, random_palette, AutoMorphScheduler};
pub use shapes::{BuiltinShapes, ShapeFile, ShapeSource};
pub use tween::{Easing, Lerp, Tween};
pub use uniforms::MorphUniforms;
