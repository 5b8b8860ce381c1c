use std::sync::Arc;

use winit::window::Window;

use morphcloud_common::Rgb;
use morphcloud_config::schema::CameraConfig;
use morphcloud_core::MorphableCloud;

use crate::camera::OrbitCamera;
use crate::cloud::CloudPipeline;
use crate::gpu::{GpuContext, GpuUniforms, RendererError};

use super::helpers::clear_color;

/// Core rendering state holding the GPU context and the cloud pipeline.
///
/// The pipeline is created once geometry is available; until then frames
/// only clear to the background color.
pub struct RenderState {
    pub gpu: GpuContext,
    pub camera: OrbitCamera,
    pub cloud: Option<CloudPipeline>,
    pub uniforms: GpuUniforms,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, camera: &CameraConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;

        Ok(Self {
            gpu,
            camera: OrbitCamera::from_config(camera),
            cloud: None,
            uniforms: GpuUniforms::new(),
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Upload `cloud`'s normalized buffers and attributes.
    pub fn attach_cloud(&mut self, cloud: &MorphableCloud) {
        self.cloud = Some(CloudPipeline::new(
            &self.gpu.device,
            self.gpu.format(),
            cloud.positions(),
            cloud.attributes(),
        ));
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Set the background clear color (sRGB).
    pub fn set_clear_color(&mut self, color: Rgb) {
        self.clear_color = clear_color(color);
    }

    /// Advance camera auto-rotation by `dt` seconds.
    pub fn update_camera(&mut self, dt: f32) {
        self.camera.update(dt);
    }
}
