//! Scalar and `[f32; 3]` helpers with GLSL/WGSL semantics.
//!
//! The CPU reference of the transition shader uses these so it computes the
//! same values the GPU does.

/// A 3D point or vector.
pub type Point3 = [f32; 3];

/// `mix(a, b, t)`: exact `a` at `t = 0` and exact `b` at `t = 1`.
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

pub fn mix3(a: Point3, b: Point3, t: f32) -> Point3 {
    [mix(a[0], b[0], t), mix(a[1], b[1], t), mix(a[2], b[2], t)]
}

/// Hermite interpolation between `edge0` and `edge1`, clamped to `[0, 1]`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub fn add3(a: Point3, b: Point3) -> Point3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn scale3(a: Point3, s: f32) -> Point3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

pub fn dot3(a: Point3, b: Point3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn length3(a: Point3) -> f32 {
    dot3(a, a).sqrt()
}

// =============================================================================
// Tests
// =============================================================================
