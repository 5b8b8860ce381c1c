use morphcloud_common::MorphError;

use crate::math::Point3;

/// One raw, independently-authored point cloud.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointCloud {
    pub name: String,
    pub points: Vec<Point3>,
}

impl PointCloud {
    pub fn new(name: impl Into<String>, points: Vec<Point3>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Ordered catalog of raw shapes. Always holds at least one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSet {
    shapes: Vec<PointCloud>,
}

impl ShapeSet {
    /// Rejects an empty catalog. Individual empty shapes are accepted here and
    /// reported by [`normalize`](super::normalize) when padding them.
    pub fn new(shapes: Vec<PointCloud>) -> Result<Self, MorphError> {
        if shapes.is_empty() {
            return Err(MorphError::EmptyCatalog);
        }
        Ok(Self { shapes })
    }

    pub fn shapes(&self) -> &[PointCloud] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Largest point count over all shapes.
    pub fn max_count(&self) -> usize {
        self.shapes.iter().map(PointCloud::len).max().unwrap_or(0)
    }
}

/// One equal-length position buffer per shape.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPositions {
    buffers: Vec<Vec<Point3>>,
    names: Vec<String>,
    len: usize,
}

impl NormalizedPositions {
    pub(crate) fn new(buffers: Vec<Vec<Point3>>, names: Vec<String>, len: usize) -> Self {
        debug_assert!(buffers.iter().all(|b| b.len() == len));
        Self {
            buffers,
            names,
            len,
        }
    }

    /// Shared length of every buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn shape_count(&self) -> usize {
        self.buffers.len()
    }

    pub fn buffers(&self) -> &[Vec<Point3>] {
        &self.buffers
    }

    pub fn buffer(&self, index: usize) -> Result<&[Point3], MorphError> {
        self.buffers
            .get(index)
            .map(Vec::as_slice)
            .ok_or(MorphError::InvalidShapeIndex {
                index,
                count: self.buffers.len(),
            })
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }
}
