//! Window creation, renderer initialization, and shape loading.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use morphcloud_common::{CloudError, Rgb};
use morphcloud_config::schema::CameraConfig;
use morphcloud_config::{parse_color, CloudConfig};
use morphcloud_core::{BuiltinShapes, CloudSettings, MorphableCloud, ShapeFile, ShapeSource};
use morphcloud_renderer::{RenderState, RendererError};

use super::core::MorphCloudApp;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl MorphCloudApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let mut rs = match create_renderer(window.clone(), &self.config.camera) {
            Ok(rs) => rs,
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        };

        let clear_default = Rgb::from_bytes(0x16, 0x09, 0x20);
        rs.set_clear_color(parse_color(
            "colors.clear",
            &self.config.colors.clear,
            clear_default,
        ));

        // A cloud that fails to load leaves the slot empty; frames still
        // clear and control input is rejected with `NotLoaded`.
        match self.load_cloud() {
            Ok(mut cloud) => {
                let size = window.inner_size();
                let scale = window.scale_factor();
                let logical = size.to_logical::<f64>(scale);
                cloud.resize(logical.width as f32, logical.height as f32, scale as f32);
                rs.attach_cloud(&cloud);
                self.cloud.load(cloud);
            }
            Err(e) => tracing::error!("Failed to load point cloud: {e}"),
        }

        self.render_state = Some(rs);
        self.window = Some(window);
        tracing::info!("Window created and renderer initialized");
        true
    }

    /// Read the configured shape source and build the cloud from it.
    fn load_cloud(&mut self) -> morphcloud_common::Result<MorphableCloud> {
        let source: Box<dyn ShapeSource> = match self.config.shapes.path {
            Some(ref path) => Box::new(ShapeFile::new(path.clone())),
            None => Box::new(BuiltinShapes),
        };
        tracing::info!(source = %source.describe(), "Loading shapes");
        let shapes = source.load()?;

        let mut settings = cloud_settings(&self.config);
        if settings.initial_shape >= shapes.len() {
            tracing::warn!(
                initial_shape = settings.initial_shape,
                shapes = shapes.len(),
                "Initial shape out of range, starting from shape 0"
            );
            settings.initial_shape = 0;
        }

        let cloud = MorphableCloud::from_shapes(&shapes, settings, &mut self.rng)?;
        Ok(cloud)
    }
}

/// Bring up the GPU state for `window`, blocking until the device is ready.
fn create_renderer(
    window: Arc<Window>,
    camera: &CameraConfig,
) -> morphcloud_common::Result<RenderState> {
    pollster::block_on(RenderState::new(window, camera)).map_err(renderer_error)
}

fn renderer_error(err: RendererError) -> CloudError {
    CloudError::Renderer(err.to_string())
}

/// Translate config values into cloud tunables.
pub(super) fn cloud_settings(config: &CloudConfig) -> CloudSettings {
    let defaults = CloudSettings::default();
    CloudSettings {
        morph_duration: config.morph.duration as f32,
        color_transition: config.colors.transition as f32,
        size: config.particles.size as f32,
        max_pixel_ratio: config.particles.max_pixel_ratio as f32,
        initial_shape: config.morph.initial_shape,
        color_a: parse_color("colors.color_a", &config.colors.color_a, defaults.color_a),
        color_b: parse_color("colors.color_b", &config.colors.color_b, defaults.color_b),
    }
}

// =============================================================================
// Tests
// =============================================================================
