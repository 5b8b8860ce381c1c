//! JSON shape file:
//!
//! ```json
//! { "shapes": [ { "name": "star", "positions": [[0.0, 1.0, 0.0], ...] } ] }
//! ```

use std::path::{Path, PathBuf};

use morphcloud_common::MorphError;
use serde::{Deserialize, Serialize};

use super::ShapeSource;
use crate::geometry::{PointCloud, ShapeSet};
use crate::math::Point3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeFileDocument {
    pub shapes: Vec<ShapeEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeEntry {
    #[serde(default)]
    pub name: String,
    pub positions: Vec<Point3>,
}

/// Shapes read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct ShapeFile {
    path: PathBuf,
}

impl ShapeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShapeSource for ShapeFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<ShapeSet, MorphError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| MorphError::ShapeFile(format!("{}: {e}", self.path.display())))?;
        parse_shapes(&content)
    }
}

/// Parse a shape document. Unnamed shapes are called `shape<i>`.
pub fn parse_shapes(json: &str) -> Result<ShapeSet, MorphError> {
    let document: ShapeFileDocument =
        serde_json::from_str(json).map_err(|e| MorphError::ShapeFile(e.to_string()))?;

    let mut shapes = Vec::with_capacity(document.shapes.len());
    for (i, entry) in document.shapes.into_iter().enumerate() {
        if let Some(p) = entry
            .positions
            .iter()
            .find(|p| !p.iter().all(|c| c.is_finite()))
        {
            return Err(MorphError::ShapeFile(format!(
                "shape {i} has a non-finite position {p:?}"
            )));
        }
        let name = if entry.name.is_empty() {
            format!("shape{i}")
        } else {
            entry.name
        };
        shapes.push(PointCloud::new(name, entry.positions));
    }
    ShapeSet::new(shapes)
}

// =============================================================================
// Tests
// =============================================================================
