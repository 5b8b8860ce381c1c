//! `MorphableCloud`: the owned aggregate of normalized buffers, per-vertex
//! attributes, morph state, color state and uniforms.
//!
//! The hosting application owns the frame loop and calls
//! [`MorphableCloud::advance_frame`] once per displayed frame. The cloud never
//! schedules itself.

mod slot;

pub use slot::*;

use morphcloud_common::{MorphError, Rgb};
use rand::Rng;

use crate::color_state::{ColorSlot, ColorState};
use crate::geometry::{normalize, NormalizedPositions, PerVertexAttributes, ShapeSet};
use crate::morph::{AttributeBindings, MorphState, Morphable};
use crate::transition::{self, TransitionInputs, VertexOutput};
use crate::uniforms::MorphUniforms;

/// Tunables for a [`MorphableCloud`].
#[derive(Debug, Clone, PartialEq)]
pub struct CloudSettings {
    /// Seconds for global progress to go from 0 to 1.
    pub morph_duration: f32,
    /// Seconds for a color change to complete. 0 snaps.
    pub color_transition: f32,
    /// Global point size multiplier.
    pub size: f32,
    /// Upper bound for the device pixel ratio used in `resolution`.
    pub max_pixel_ratio: f32,
    pub initial_shape: usize,
    pub color_a: Rgb,
    pub color_b: Rgb,
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            morph_duration: 2.5,
            color_transition: 2.5,
            size: 0.4,
            max_pixel_ratio: 2.0,
            initial_shape: 0,
            color_a: Rgb::from_bytes(0xff, 0x73, 0x00),
            color_b: Rgb::from_bytes(0x00, 0x91, 0xff),
        }
    }
}

/// Tweens requested since the last frame. They start on the next accepted
/// frame, so a gap between frames never eats into a ramp.
#[derive(Debug, Clone, Copy, Default)]
struct PendingStarts {
    morph: bool,
    color_a: bool,
    color_b: bool,
}

#[derive(Debug, Clone)]
pub struct MorphableCloud {
    positions: NormalizedPositions,
    attributes: PerVertexAttributes,
    state: MorphState,
    colors: ColorState,
    uniforms: MorphUniforms,
    max_pixel_ratio: f32,
    clock: f32,
    pending: PendingStarts,
}

impl MorphableCloud {
    /// Assemble a cloud from already-normalized buffers.
    ///
    /// Fails when the attributes do not cover every point or when
    /// `initial_shape` is not in the catalog.
    pub fn new(
        positions: NormalizedPositions,
        attributes: PerVertexAttributes,
        settings: CloudSettings,
    ) -> Result<Self, MorphError> {
        if attributes.len() != positions.len() {
            return Err(MorphError::AttributeLengthMismatch {
                expected: positions.len(),
                actual: attributes.len(),
            });
        }
        let state = MorphState::new(
            settings.initial_shape,
            positions.shape_count(),
            settings.morph_duration,
        )?;
        let colors = ColorState::new(
            settings.color_a,
            settings.color_b,
            settings.color_transition,
        );
        let uniforms = MorphUniforms::new(settings.size, settings.color_a, settings.color_b);

        tracing::info!(
            shapes = positions.shape_count(),
            points = positions.len(),
            initial = settings.initial_shape,
            "Morphable cloud ready"
        );

        Ok(Self {
            positions,
            attributes,
            state,
            colors,
            uniforms,
            max_pixel_ratio: settings.max_pixel_ratio.max(1.0),
            clock: 0.0,
            pending: PendingStarts::default(),
        })
    }

    /// Normalize `shapes`, generate per-vertex attributes, and assemble.
    pub fn from_shapes<R: Rng + ?Sized>(
        shapes: &ShapeSet,
        settings: CloudSettings,
        rng: &mut R,
    ) -> Result<Self, MorphError> {
        let positions = normalize(shapes, rng)?;
        let attributes = PerVertexAttributes::generate(positions.len(), rng);
        Self::new(positions, attributes, settings)
    }

    /// Push the elapsed clock into the uniforms and sample running tweens.
    ///
    /// Morphs and color changes requested since the previous call start at
    /// `elapsed`. `elapsed` must not decrease between calls. A rejected value
    /// leaves the cloud untouched.
    pub fn advance_frame(&mut self, elapsed: f32) -> Result<(), MorphError> {
        // `!(a >= b)` also rejects NaN.
        if !(elapsed >= self.clock) {
            return Err(MorphError::ClockWentBackwards {
                previous: self.clock,
                now: elapsed,
            });
        }
        self.clock = elapsed;
        self.start_pending(elapsed);
        self.uniforms.time = elapsed;
        self.uniforms.progress = self.state.update(elapsed);
        let (a, b) = self.colors.sample(elapsed);
        self.uniforms.color_a = a;
        self.uniforms.color_b = b;
        Ok(())
    }

    /// Anchor tweens requested since the last frame at `now`.
    fn start_pending(&mut self, now: f32) {
        let pending = std::mem::take(&mut self.pending);
        if pending.morph {
            self.state.restart_at(now);
        }
        if pending.color_a {
            self.colors.restart_at(ColorSlot::A, now);
        }
        if pending.color_b {
            self.colors.restart_at(ColorSlot::B, now);
        }
    }

    /// Retarget one blend color; it eases in from the displayed value.
    pub fn set_color(&mut self, slot: ColorSlot, color: Rgb) {
        self.colors.set(slot, color, self.clock);
        match slot {
            ColorSlot::A => self.pending.color_a = true,
            ColorSlot::B => self.pending.color_b = true,
        }
    }

    pub fn set_color_transition(&mut self, seconds: f32) {
        self.colors.set_duration(seconds);
    }

    /// Update `resolution` from a logical viewport size and the device pixel
    /// ratio, capped at the configured maximum.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        let ratio = pixel_ratio.clamp(f32::MIN_POSITIVE, self.max_pixel_ratio);
        self.uniforms.update_viewport(width, height, ratio);
        tracing::debug!(
            width,
            height,
            ratio,
            resolution = ?self.uniforms.resolution,
            "Cloud viewport updated"
        );
    }

    pub fn bindings(&self) -> AttributeBindings {
        self.state.bindings()
    }

    pub fn uniforms(&self) -> &MorphUniforms {
        &self.uniforms
    }

    pub fn progress(&self) -> f32 {
        self.state.progress()
    }

    pub fn is_morphing(&self) -> bool {
        self.pending.morph || self.state.is_morphing(self.clock)
    }

    /// Last clock value accepted by [`advance_frame`](Self::advance_frame).
    pub fn elapsed(&self) -> f32 {
        self.clock
    }

    pub fn positions(&self) -> &NormalizedPositions {
        &self.positions
    }

    pub fn attributes(&self) -> &PerVertexAttributes {
        &self.attributes
    }

    pub fn color_target(&self, slot: ColorSlot) -> Rgb {
        self.colors.target(slot)
    }

    /// CPU evaluation of the transition program for point `index` with the
    /// current bindings and uniforms.
    pub fn evaluate_vertex(&self, index: usize) -> Result<VertexOutput, MorphError> {
        let bindings = self.bindings();
        let current = self.positions.buffer(bindings.current)?;
        let target = self.positions.buffer(bindings.target)?;
        let len = self.positions.len();
        let out_of_range = MorphError::InvalidShapeIndex { index, count: len };
        let (Some(&from), Some(&to), Some(&velocity)) = (
            current.get(index),
            target.get(index),
            self.attributes.velocities().get(index),
        ) else {
            return Err(out_of_range);
        };

        let inputs = TransitionInputs {
            progress: self.uniforms.progress,
            time: self.uniforms.time,
            color_a: self.uniforms.color_a,
            color_b: self.uniforms.color_b,
        };
        Ok(transition::displaced_position(from, to, velocity, &inputs))
    }
}

impl Morphable for MorphableCloud {
    fn shape_count(&self) -> usize {
        self.positions.shape_count()
    }

    fn current_index(&self) -> Option<usize> {
        Some(self.state.current_index())
    }

    fn begin_morph(&mut self, index: usize) -> Result<(), MorphError> {
        self.state.begin(index, self.clock)?;
        self.pending.morph = true;
        self.uniforms.progress = self.state.progress();
        Ok(())
    }
}

#[cfg(test)]
mod tests;
