//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use morphcloud_core::{random_palette, ColorSlot, Morphable};

use super::controls::Control;
use super::core::MorphCloudApp;
use super::types::FPS_REPORT_INTERVAL;

impl ApplicationHandler for MorphCloudApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.handle_resize(size);
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self.window.as_ref().map(|w| w.inner_size()) {
                    self.handle_resize(size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl MorphCloudApp {
    /// Reconfigure the surface and recompute the cloud's `resolution`.
    fn handle_resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        if let Some(ref mut rs) = self.render_state {
            rs.resize(size.width, size.height);
        }
        let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
        let logical = size.to_logical::<f64>(scale);
        if let Ok(cloud) = self.cloud.get_mut() {
            cloud.resize(logical.width as f32, logical.height as f32, scale as f32);
        }
    }

    /// Advance the cloud clock and draw one frame.
    fn render_frame(&mut self) {
        let now = self.elapsed();
        let dt = self.frame_timer.begin_frame();

        if self.cloud.is_loaded() {
            if let Err(e) = self.cloud.advance_frame(now) {
                tracing::warn!("Frame clock rejected: {e}");
            }
        }

        if let Some(ref mut rs) = self.render_state {
            rs.update_camera(dt);
            if let Err(e) = rs.render_frame(self.cloud.get().ok()) {
                tracing::error!("Render failed: {e}");
            }
        }

        self.frame_timer.report_if_due(FPS_REPORT_INTERVAL);
    }

    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        if let Some(control) = Control::from_key(&event.logical_key) {
            self.apply_control(control);
        }
    }

    fn apply_control(&mut self, control: Control) {
        match control {
            Control::MorphTo(index) => match self.cloud.begin_morph(index) {
                Ok(()) => tracing::debug!(shape = index, "Morph requested from keyboard"),
                Err(e) => tracing::warn!("Morph request rejected: {e}"),
            },
            Control::RandomizeColors => self.randomize_colors(),
            Control::ToggleAutoCycle => {
                let enabled = self.scheduler.toggle(self.elapsed());
                tracing::info!(enabled, "Auto-cycle toggled");
            }
            Control::Quit => {
                tracing::info!("Quit requested");
                self.should_exit = true;
            }
        }
    }

    /// Retarget both blend colors to a fresh random palette.
    pub(super) fn randomize_colors(&mut self) {
        let (a, b) = random_palette(&mut self.rng);
        let result = self
            .cloud
            .set_color(ColorSlot::A, a)
            .and_then(|()| self.cloud.set_color(ColorSlot::B, b));
        match result {
            Ok(()) => tracing::debug!(
                color_a = %a.to_hex(),
                color_b = %b.to_hex(),
                "Colors retargeted"
            ),
            Err(e) => tracing::warn!("Color change rejected: {e}"),
        }
    }
}
