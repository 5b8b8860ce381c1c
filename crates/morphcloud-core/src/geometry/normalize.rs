use morphcloud_common::MorphError;
use rand::Rng;

use super::{NormalizedPositions, ShapeSet};

/// Pad every shape of `set` to `set.max_count()` points.
///
/// Index `j` below a shape's own count is copied verbatim; every index past it
/// receives a point drawn uniformly (with replacement) from the same shape.
/// The largest shape therefore comes back unchanged.
pub fn normalize<R: Rng + ?Sized>(
    set: &ShapeSet,
    rng: &mut R,
) -> Result<NormalizedPositions, MorphError> {
    let len = set.max_count();
    if len == 0 {
        return Err(MorphError::EmptyCatalog);
    }

    let mut buffers = Vec::with_capacity(set.len());
    let mut names = Vec::with_capacity(set.len());
    for (shape, cloud) in set.shapes().iter().enumerate() {
        if cloud.is_empty() {
            return Err(MorphError::DegenerateGeometry { shape });
        }

        let source = &cloud.points;
        let mut buffer = Vec::with_capacity(len);
        buffer.extend_from_slice(source);
        for _ in source.len()..len {
            buffer.push(source[rng.gen_range(0..source.len())]);
        }

        tracing::debug!(
            shape,
            name = %cloud.name,
            points = source.len(),
            padded = len - source.len(),
            "Shape normalized"
        );
        buffers.push(buffer);
        names.push(cloud.name.clone());
    }

    tracing::info!(shapes = buffers.len(), points = len, "Shapes normalized");
    Ok(NormalizedPositions::new(buffers, names, len))
}

// =============================================================================
// Tests
// =============================================================================
