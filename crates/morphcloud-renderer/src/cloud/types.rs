//! Vertex types and buffer layouts for the cloud pipeline.

use morphcloud_core::PerVertexAttributes;

/// One corner of the sprite quad, in `[-1, 1]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CornerVertex {
    pub corner: [f32; 2],
}

/// Per-point attributes shared by every shape.
///
/// Layout: velocity(vec3) + size(f32) = 16 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointAttributes {
    pub velocity: [f32; 3],
    pub size: f32,
}

impl PointAttributes {
    /// Interleave sizes and velocities for upload.
    pub fn interleave(attributes: &PerVertexAttributes) -> Vec<Self> {
        attributes
            .velocities()
            .iter()
            .zip(attributes.sizes())
            .map(|(&velocity, &size)| Self { velocity, size })
            .collect()
    }
}

pub const QUAD_CORNERS: &[CornerVertex] = &[
    CornerVertex {
        corner: [-1.0, -1.0],
    },
    CornerVertex {
        corner: [1.0, -1.0],
    },
    CornerVertex {
        corner: [1.0, 1.0],
    },
    CornerVertex {
        corner: [-1.0, 1.0],
    },
];

pub const QUAD_INDICES: &[u16] = &[0, 1, 2, 0, 2, 3];

/// Slot 0: quad corner, stepped per vertex.
pub const CORNER_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<CornerVertex>() as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 0,
        shader_location: 0,
    }],
};

/// Slot 1: position in the "current" shape.
pub const CURRENT_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: 12,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &[wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 1,
    }],
};

/// Slot 2: position in the "target" shape.
pub const TARGET_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: 12,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &[wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 2,
    }],
};

/// Slot 3: velocity + size.
pub const ATTRIBUTE_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<PointAttributes>() as u64,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &[
        // velocity: vec3<f32> at offset 0
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 3,
        },
        // size: f32 at offset 12
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32,
            offset: 12,
            shader_location: 4,
        },
    ],
};

// =============================================================================
// Tests
// =============================================================================
