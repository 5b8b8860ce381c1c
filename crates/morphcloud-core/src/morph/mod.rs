//! Morph State: which shape is shown, which one it is heading to, and how far
//! along the transition is.

mod state;

pub use state::*;

use morphcloud_common::MorphError;

/// Capability exposed to control surfaces (keyboard, scheduler).
///
/// Consumers only need to know how many shapes exist and how to request one;
/// they never touch buffers or uniforms.
pub trait Morphable {
    /// Number of shapes that can be requested. Zero while nothing is loaded.
    fn shape_count(&self) -> usize;

    /// The last requested shape, or `None` while nothing is loaded.
    fn current_index(&self) -> Option<usize>;

    /// Start a transition towards shape `index`.
    ///
    /// Rejects out-of-range indices without touching any state. Requesting
    /// the current shape is allowed and replays the transition.
    fn begin_morph(&mut self, index: usize) -> Result<(), MorphError>;
}
