//! Geometry Normalizer: pads every shape to the catalog's largest point
//! count so any two shapes can be bound as "current" and "target".
//!
//! Runs once at load time. Padding points are resampled from the shape's own
//! points, so they sit on the shape rather than at the origin.

mod attributes;
mod normalize;
mod types;

pub use attributes::*;
pub use normalize::*;
pub use types::*;
