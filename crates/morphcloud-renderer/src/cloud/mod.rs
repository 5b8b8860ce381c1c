//! Point cloud rendering: instanced sprite quads driven by the transition
//! shader in `shaders/cloud.wgsl`.
//!
//! Every normalized position buffer is uploaded once. A morph only changes
//! which two buffers are bound to the "current" and "target" slots.

mod pipeline;
mod types;

pub use pipeline::*;
pub use types::*;
