//! Asset sources that hand raw point clouds to the normalizer.

mod builtin;
mod file;

pub use builtin::*;
pub use file::*;

use morphcloud_common::MorphError;

use crate::geometry::ShapeSet;

/// Anything that can produce the shape catalog.
pub trait ShapeSource {
    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<ShapeSet, MorphError>;
}
