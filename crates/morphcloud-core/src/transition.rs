//! CPU reference of the per-vertex transition program.
//!
//! `shaders/cloud.wgsl` in the renderer runs the same steps on the GPU. Every
//! function here is pure; together they compute where one point is drawn,
//! what color it has and how large its sprite is.
//!
//! Per vertex and frame:
//! 1. Blend the noise at the current and target positions by global
//!    progress, then smooth it into `[0, 1]`.
//! 2. Use that value to pick a color between A and B and to place the
//!    vertex's private `[delay, delay + 0.4]` window of global progress.
//! 3. Move from current to target by the local progress, add static jitter,
//!    then layer velocity-driven oscillation, noise drift and a gentle sway.

use morphcloud_common::Rgb;

use crate::math::{add3, mix, mix3, scale3, smoothstep, Point3};
use crate::noise::simplex3;

/// Scale applied to positions before sampling the stagger noise.
pub const NOISE_SCALE: f32 = 0.2;
/// Width of each vertex's window, as a fraction of global progress.
pub const STAGGER_DURATION: f32 = 0.4;
/// Per-axis position scales of the static jitter noise.
pub const JITTER_SCALES: [f32; 3] = [0.05, 0.1, 0.15];
pub const JITTER_AMPLITUDE: f32 = 0.1;
pub const VELOCITY_AMPLITUDE: f32 = 0.5;
pub const DRIFT_AMPLITUDE: f32 = 0.002;
pub const SWAY_AMPLITUDE: f32 = 0.02;
pub const SWAY_FREQUENCY: f32 = 0.5;
/// Smallest view depth used for sprite sizing.
pub const MIN_POINT_DEPTH: f32 = 1e-4;

/// Step 1: smoothed noise in `[0, 1]` for a vertex moving `current → target`.
pub fn blended_noise(current: Point3, target: Point3, progress: f32) -> f32 {
    let from = simplex3(scale3(current, NOISE_SCALE));
    let to = simplex3(scale3(target, NOISE_SCALE));
    smoothstep(-1.0, 1.0, mix(from, to, progress))
}

/// The slice of global progress during which one vertex moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionWindow {
    pub delay: f32,
    pub end: f32,
}

impl TransitionWindow {
    /// Low noise starts early; high noise waits. Every window is
    /// [`STAGGER_DURATION`] wide and lies inside `[0, 1]`.
    pub fn for_noise(noise: f32) -> Self {
        let delay = (1.0 - STAGGER_DURATION) * noise.clamp(0.0, 1.0);
        Self {
            delay,
            end: delay + STAGGER_DURATION,
        }
    }

    pub fn local_progress(&self, global: f32) -> f32 {
        smoothstep(self.delay, self.end, global)
    }
}

/// Local progress of a vertex with smoothed `noise` at global `progress`.
pub fn local_progress(noise: f32, progress: f32) -> f32 {
    TransitionWindow::for_noise(noise).local_progress(progress)
}

/// Step 2: `mix(A, B, noise)`; exact A at 0 and exact B at 1.
pub fn vertex_color(color_a: Rgb, color_b: Rgb, noise: f32) -> Rgb {
    Rgb::from(mix3(color_a.into(), color_b.into(), noise))
}

/// Step 3 without ambient motion: blended position plus static jitter.
pub fn morphed_position(current: Point3, target: Point3, local: f32) -> Point3 {
    let jitter = [
        simplex3(scale3(current, JITTER_SCALES[0])),
        simplex3(scale3(current, JITTER_SCALES[1])),
        simplex3(scale3(current, JITTER_SCALES[2])),
    ];
    add3(mix3(current, target, local), scale3(jitter, JITTER_AMPLITUDE))
}

/// Continuous motion layered on a morphed position at time `time`.
///
/// Runs whether or not a morph is in progress.
pub fn ambient_motion(mixed: Point3, velocity: Point3, time: f32) -> Point3 {
    let [x, y, z] = mixed;
    let phase = time + x * 7.0 + y * 3.0 + z * 5.0;
    let oscillation = scale3(velocity, phase.sin() * VELOCITY_AMPLITUDE);
    let drift = [
        simplex3([x * 0.05 + time, y * 0.1, z * 0.1]),
        simplex3([x * 0.1, y * 0.2 + time, z * 0.2]),
        simplex3([x * 0.15, y * 0.3, z * 0.3 + time]),
    ];
    let moved = add3(mixed, add3(oscillation, scale3(drift, DRIFT_AMPLITUDE)));

    let t = time * SWAY_FREQUENCY;
    let sway = [
        (t + moved[0]).sin(),
        (t + moved[1]).cos(),
        (t + moved[2]).sin(),
    ];
    add3(moved, scale3(sway, SWAY_AMPLITUDE))
}

/// Everything the vertex stage computes for one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexOutput {
    pub position: Point3,
    pub color: Rgb,
    pub noise: f32,
    pub local_progress: f32,
}

/// Uniform inputs of [`displaced_position`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionInputs {
    pub progress: f32,
    pub time: f32,
    pub color_a: Rgb,
    pub color_b: Rgb,
}

/// Full model-space position and color of one vertex.
pub fn displaced_position(
    current: Point3,
    target: Point3,
    velocity: Point3,
    inputs: &TransitionInputs,
) -> VertexOutput {
    let noise = blended_noise(current, target, inputs.progress);
    let local = local_progress(noise, inputs.progress);
    let mixed = morphed_position(current, target, local);
    VertexOutput {
        position: ambient_motion(mixed, velocity, inputs.time),
        color: vertex_color(inputs.color_a, inputs.color_b, noise),
        noise,
        local_progress: local,
    }
}

/// Sprite diameter in pixels: `size × uSize × resolution.y / -view_z`.
///
/// `view_z` is the view-space depth (negative in front of the camera). The
/// depth is clamped to [`MIN_POINT_DEPTH`]; points behind the eye are then
/// dropped by clipping, not by their size.
pub fn point_size(size: f32, size_uniform: f32, resolution_y: f32, view_z: f32) -> f32 {
    let depth = (-view_z).max(MIN_POINT_DEPTH);
    size * size_uniform * resolution_y * (1.0 / depth)
}

/// Soft glow falloff: `0.05 / d - 0.1`, clamped to `[0, 1]`.
///
/// `distance` is measured from the sprite center in sprite UV units, so the
/// glow vanishes past `d = 0.5` and the center saturates.
pub fn sprite_alpha(distance: f32) -> f32 {
    if distance <= 0.0 {
        return 1.0;
    }
    (0.05 / distance - 0.1).clamp(0.0, 1.0)
}

// =============================================================================
// Tests
// =============================================================================
