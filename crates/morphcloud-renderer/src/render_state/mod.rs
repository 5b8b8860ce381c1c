//! Per-window render state: GPU context, camera, cloud pipeline.

mod frame;
mod helpers;
mod state;

pub use state::RenderState;
