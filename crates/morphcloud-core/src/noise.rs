//! 3D simplex gradient noise.
//!
//! This is the classic four-corner simplex construction with a
//! `mod 289` permutation polynomial and 7×7 gradient lattice mapped onto an
//! octahedron. The WGSL shader carries the same function, so CPU and GPU
//! agree on which points move first during a morph.
//!
//! Output lies in roughly `[-1, 1]` and is defined for every finite input.

use crate::math::{dot3, Point3};

fn mod289(x: f32) -> f32 {
    x - (x / 289.0).floor() * 289.0
}

fn permute(x: f32) -> f32 {
    mod289((x * 34.0 + 1.0) * x)
}

fn taylor_inv_sqrt(r: f32) -> f32 {
    1.792_842_9 - 0.853_734_7 * r
}

/// GLSL `step(edge, x)`.
fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// Sample 3D simplex noise at `v`.
pub fn simplex3(v: Point3) -> f32 {
    const C_X: f32 = 1.0 / 6.0;
    const C_Y: f32 = 1.0 / 3.0;

    // First corner
    let skew = (v[0] + v[1] + v[2]) * C_Y;
    let i = [
        (v[0] + skew).floor(),
        (v[1] + skew).floor(),
        (v[2] + skew).floor(),
    ];
    let unskew = (i[0] + i[1] + i[2]) * C_X;
    let x0 = [
        v[0] - i[0] + unskew,
        v[1] - i[1] + unskew,
        v[2] - i[2] + unskew,
    ];

    // Other corners
    let g = [step(x0[1], x0[0]), step(x0[2], x0[1]), step(x0[0], x0[2])];
    let l = [1.0 - g[0], 1.0 - g[1], 1.0 - g[2]];
    let i1 = [g[0].min(l[2]), g[1].min(l[0]), g[2].min(l[1])];
    let i2 = [g[0].max(l[2]), g[1].max(l[0]), g[2].max(l[1])];

    let x1 = [
        x0[0] - i1[0] + C_X,
        x0[1] - i1[1] + C_X,
        x0[2] - i1[2] + C_X,
    ];
    let x2 = [
        x0[0] - i2[0] + 2.0 * C_X,
        x0[1] - i2[1] + 2.0 * C_X,
        x0[2] - i2[2] + 2.0 * C_X,
    ];
    let x3 = [
        x0[0] - 1.0 + 3.0 * C_X,
        x0[1] - 1.0 + 3.0 * C_X,
        x0[2] - 1.0 + 3.0 * C_X,
    ];
    let corners = [x0, x1, x2, x3];
    let offsets = [[0.0; 3], i1, i2, [1.0; 3]];

    // Permutations
    let i = [mod289(i[0]), mod289(i[1]), mod289(i[2])];

    // Gradients: 7×7 points over a square, mapped onto an octahedron.
    let ns = [2.0 / 7.0, 0.5 / 7.0 - 1.0, 1.0 / 7.0];

    let mut total = 0.0;
    for (corner, offset) in corners.iter().zip(offsets.iter()) {
        let p = permute(permute(permute(i[2] + offset[2]) + i[1] + offset[1]) + i[0] + offset[0]);

        let j = p - 49.0 * (p * ns[2] * ns[2]).floor();
        let gx_ = (j * ns[2]).floor();
        let gy_ = (j - 7.0 * gx_).floor();

        let gx = gx_ * ns[0] + ns[1];
        let gy = gy_ * ns[0] + ns[1];
        let h = 1.0 - gx.abs() - gy.abs();

        let sh = -step(h, 0.0);
        let sx = gx.floor() * 2.0 + 1.0;
        let sy = gy.floor() * 2.0 + 1.0;
        let gradient = [gx + sx * sh, gy + sy * sh, h];

        let norm = taylor_inv_sqrt(dot3(gradient, gradient));
        let gradient = [gradient[0] * norm, gradient[1] * norm, gradient[2] * norm];

        let m = (0.6 - dot3(*corner, *corner)).max(0.0);
        let m = m * m;
        total += m * m * dot3(gradient, *corner);
    }

    42.0 * total
}

// =============================================================================
// Tests
// =============================================================================
