use morphcloud_core::MorphableCloud;

use crate::gpu::RendererError;

use super::helpers::log_first_frame;
use super::state::RenderState;

impl RenderState {
    /// Render a complete frame: clear, upload uniforms, draw the cloud.
    ///
    /// `cloud` is `None` while no geometry is loaded; the frame is then only
    /// cleared.
    pub fn render_frame(&mut self, cloud: Option<&MorphableCloud>) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let draw = match (&self.cloud, cloud) {
            (Some(pipeline), Some(cloud)) => {
                let aspect = self.gpu.size.aspect();
                self.uniforms
                    .update_camera(self.camera.view(), self.camera.projection(aspect));
                self.uniforms.update_morph(cloud.uniforms());
                pipeline.update_uniforms(&self.gpu.queue, &self.uniforms);
                Some((pipeline, cloud.bindings()))
            }
            _ => None,
        };

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("morphcloud frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("morphcloud main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some((pipeline, bindings)) = draw {
                pipeline.render(&mut pass, bindings);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
