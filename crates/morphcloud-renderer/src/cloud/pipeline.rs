//! wgpu render pipeline for the morphing cloud.

use morphcloud_core::{AttributeBindings, NormalizedPositions, PerVertexAttributes};
use wgpu::util::DeviceExt;

use super::types::{
    PointAttributes, ATTRIBUTE_LAYOUT, CORNER_LAYOUT, CURRENT_LAYOUT, QUAD_CORNERS, QUAD_INDICES,
    TARGET_LAYOUT,
};
use crate::gpu::GpuUniforms;

pub const SHADER_SOURCE: &str = include_str!("../shaders/cloud.wgsl");

/// Additive glow: `src * src_alpha + dst`.
const ADDITIVE_BLEND: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

/// Pipeline, uniform block and every shape's position buffer.
pub struct CloudPipeline {
    pipeline: wgpu::RenderPipeline,
    corner_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    position_buffers: Vec<wgpu::Buffer>,
    attribute_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    point_count: u32,
}

impl CloudPipeline {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        positions: &NormalizedPositions,
        attributes: &PerVertexAttributes,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cloud shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let corner_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cloud corner buffer"),
            contents: bytemuck::cast_slice(QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cloud index buffer"),
            contents: bytemuck::cast_slice(QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let position_buffers: Vec<wgpu::Buffer> = positions
            .buffers()
            .iter()
            .enumerate()
            .map(|(i, buffer)| {
                let label = format!("cloud positions {}", positions.name(i).unwrap_or("?"));
                device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&label),
                    contents: bytemuck::cast_slice(buffer),
                    usage: wgpu::BufferUsages::VERTEX,
                })
            })
            .collect();

        let attribute_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cloud attribute buffer"),
            contents: bytemuck::cast_slice(&PointAttributes::interleave(attributes)),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cloud uniforms"),
            contents: bytemuck::bytes_of(&GpuUniforms::new()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cloud bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<GpuUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cloud bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("cloud pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("cloud pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[CORNER_LAYOUT, CURRENT_LAYOUT, TARGET_LAYOUT, ATTRIBUTE_LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(ADDITIVE_BLEND),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            // No depth buffer: additive sprites are order-independent.
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        tracing::info!(
            shapes = position_buffers.len(),
            points = positions.len(),
            "Cloud pipeline created"
        );

        Self {
            pipeline,
            corner_buffer,
            index_buffer,
            position_buffers,
            attribute_buffer,
            uniform_buffer,
            bind_group,
            point_count: positions.len() as u32,
        }
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &GpuUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Draw every point with the shapes selected by `bindings`.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>, bindings: AttributeBindings) {
        let (Some(current), Some(target)) = (
            self.position_buffers.get(bindings.current),
            self.position_buffers.get(bindings.target),
        ) else {
            tracing::warn!(?bindings, "Cloud bindings out of range, skipping draw");
            return;
        };

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.corner_buffer.slice(..));
        pass.set_vertex_buffer(1, current.slice(..));
        pass.set_vertex_buffer(2, target.slice(..));
        pass.set_vertex_buffer(3, self.attribute_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..self.point_count);
    }

    pub fn point_count(&self) -> u32 {
        self.point_count
    }

    pub fn shape_count(&self) -> usize {
        self.position_buffers.len()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use morphcloud_core::transition;

    fn parse() -> naga::Module {
        naga::front::wgsl::parse_str(SHADER_SOURCE)
            .unwrap_or_else(|e| panic!("{}", e.emit_to_string(SHADER_SOURCE)))
    }

    fn f32_constant(module: &naga::Module, name: &str) -> f32 {
        let (_, constant) = module
            .constants
            .iter()
            .find(|(_, c)| c.name.as_deref() == Some(name))
            .unwrap_or_else(|| panic!("missing constant {name}"));
        match module.global_expressions[constant.init] {
            naga::Expression::Literal(naga::Literal::F32(value)) => value,
            ref other => panic!("{name} is not an f32 literal: {other:?}"),
        }
    }

    #[test]
    fn shader_validates() {
        let module = parse();
        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        )
        .validate(&module)
        .unwrap();
    }

    #[test]
    fn shader_has_both_entry_points() {
        let module = parse();
        let names: Vec<&str> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
        assert!(names.contains(&"vs_main"));
        assert!(names.contains(&"fs_main"));
    }

    #[test]
    fn shader_constants_match_cpu_transition() {
        let module = parse();
        let expected = [
            ("NOISE_SCALE", transition::NOISE_SCALE),
            ("STAGGER_DURATION", transition::STAGGER_DURATION),
            ("JITTER_SCALE_X", transition::JITTER_SCALES[0]),
            ("JITTER_SCALE_Y", transition::JITTER_SCALES[1]),
            ("JITTER_SCALE_Z", transition::JITTER_SCALES[2]),
            ("JITTER_AMPLITUDE", transition::JITTER_AMPLITUDE),
            ("VELOCITY_AMPLITUDE", transition::VELOCITY_AMPLITUDE),
            ("DRIFT_AMPLITUDE", transition::DRIFT_AMPLITUDE),
            ("SWAY_AMPLITUDE", transition::SWAY_AMPLITUDE),
            ("SWAY_FREQUENCY", transition::SWAY_FREQUENCY),
            ("MIN_POINT_DEPTH", transition::MIN_POINT_DEPTH),
        ];
        for (name, value) in expected {
            assert_eq!(f32_constant(&module, name), value, "{name}");
        }
    }
}
