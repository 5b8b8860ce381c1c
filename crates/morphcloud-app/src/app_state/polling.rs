//! Per-iteration scheduling: auto-morph and continuous redraw.

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use morphcloud_core::Morphable;

use super::core::MorphCloudApp;

impl MorphCloudApp {
    /// Fire the auto-morph scheduler if due, then keep frames coming.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(current) = self.cloud.current_index() {
            let now = self.elapsed();
            let count = self.cloud.shape_count();
            if let Some(target) = self.scheduler.poll(now, current, count, &mut self.rng) {
                match self.cloud.begin_morph(target) {
                    Ok(()) => {
                        tracing::debug!(from = current, to = target, "Auto-morph");
                        if self.config.colors.randomize {
                            self.randomize_colors();
                        }
                    }
                    Err(e) => tracing::warn!("Auto-morph rejected: {e}"),
                }
            }
        }

        // The cloud animates every frame, so there is no idle state.
        self.request_redraw();
        event_loop.set_control_flow(ControlFlow::Poll);
    }
}
