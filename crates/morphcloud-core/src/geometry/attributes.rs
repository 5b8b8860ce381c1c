use morphcloud_common::MorphError;
use rand::Rng;

use crate::math::Point3;

/// Per-index size and velocity, shared by every shape.
///
/// Generated once after normalization. Index correspondence is positional, so
/// point `j` keeps its size and velocity across all morphs.
#[derive(Debug, Clone, PartialEq)]
pub struct PerVertexAttributes {
    sizes: Vec<f32>,
    velocities: Vec<Point3>,
}

impl PerVertexAttributes {
    /// Sizes uniform in `[0, 1)`; velocity components `(u - 0.1) * 0.2`.
    pub fn generate<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let sizes = (0..len).map(|_| rng.gen::<f32>()).collect();
        let mut component = || (rng.gen::<f32>() - 0.1) * 0.2;
        let velocities = (0..len)
            .map(|_| [component(), component(), component()])
            .collect();
        Self { sizes, velocities }
    }

    /// Build from precomputed values. Both slices must have the same length.
    pub fn from_parts(sizes: Vec<f32>, velocities: Vec<Point3>) -> Result<Self, MorphError> {
        if sizes.len() != velocities.len() {
            return Err(MorphError::AttributeLengthMismatch {
                expected: sizes.len(),
                actual: velocities.len(),
            });
        }
        Ok(Self { sizes, velocities })
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn velocities(&self) -> &[Point3] {
        &self.velocities
    }
}

// =============================================================================
// Tests
// =============================================================================
