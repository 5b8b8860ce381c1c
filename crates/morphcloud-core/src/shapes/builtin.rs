//! Procedural catalog used when no shape file is configured.
//!
//! The four shapes have deliberately different point counts so the
//! normalizer always has padding to do. Everything fits inside a radius of
//! about 4 units, which the default camera at distance 16 frames fully.

use std::f32::consts::{PI, TAU};

use morphcloud_common::MorphError;

use super::ShapeSource;
use crate::geometry::{PointCloud, ShapeSet};
use crate::math::Point3;

pub const SPHERE_POINTS: usize = 5000;
pub const TORUS_RINGS: usize = 120;
pub const TORUS_SIDES: usize = 60;
pub const CUBE_GRID: usize = 30;
pub const HELIX_POINTS_PER_STRAND: usize = 4000;

/// The built-in sphere, torus, cube shell and double helix.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinShapes;

impl ShapeSource for BuiltinShapes {
    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }

    fn load(&self) -> Result<ShapeSet, MorphError> {
        ShapeSet::new(vec![
            fibonacci_sphere(SPHERE_POINTS, 3.5),
            torus(TORUS_RINGS, TORUS_SIDES, 3.0, 1.1),
            cube_shell(CUBE_GRID, 2.6),
            double_helix(HELIX_POINTS_PER_STRAND, 1.8, 8.0, 3.0),
        ])
    }
}

/// Evenly spread points on a sphere surface (golden-angle spiral).
pub fn fibonacci_sphere(count: usize, radius: f32) -> PointCloud {
    let golden = PI * (3.0 - 5.0_f32.sqrt());
    let points = (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f32 + 0.5) / count as f32;
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden * i as f32;
            [
                theta.cos() * ring * radius,
                y * radius,
                theta.sin() * ring * radius,
            ]
        })
        .collect();
    PointCloud::new("sphere", points)
}

/// Torus lying in the XY plane, facing the camera.
pub fn torus(rings: usize, sides: usize, major: f32, minor: f32) -> PointCloud {
    let mut points = Vec::with_capacity(rings * sides);
    for ring in 0..rings {
        let u = TAU * ring as f32 / rings as f32;
        for side in 0..sides {
            let v = TAU * side as f32 / sides as f32;
            let r = major + minor * v.cos();
            points.push([r * u.cos(), r * u.sin(), minor * v.sin()]);
        }
    }
    PointCloud::new("torus", points)
}

/// `grid × grid` points on each of the six faces of a cube.
pub fn cube_shell(grid: usize, half: f32) -> PointCloud {
    let step = |i: usize| -half + 2.0 * half * i as f32 / (grid.max(2) - 1) as f32;
    let mut points: Vec<Point3> = Vec::with_capacity(grid * grid * 6);
    for axis in 0..3 {
        for sign in [-half, half] {
            for a in 0..grid {
                for b in 0..grid {
                    let mut p = [0.0; 3];
                    p[axis] = sign;
                    p[(axis + 1) % 3] = step(a);
                    p[(axis + 2) % 3] = step(b);
                    points.push(p);
                }
            }
        }
    }
    PointCloud::new("cube", points)
}

/// Two interleaved strands winding `turns` times around the Y axis.
pub fn double_helix(per_strand: usize, radius: f32, height: f32, turns: f32) -> PointCloud {
    let mut points = Vec::with_capacity(per_strand * 2);
    for strand in 0..2 {
        let offset = PI * strand as f32;
        for i in 0..per_strand {
            let t = i as f32 / per_strand.max(2).saturating_sub(1) as f32;
            let angle = TAU * turns * t + offset;
            points.push([
                radius * angle.cos(),
                height * (t - 0.5),
                radius * angle.sin(),
            ]);
        }
    }
    PointCloud::new("helix", points)
}

// =============================================================================
// Tests
// =============================================================================
