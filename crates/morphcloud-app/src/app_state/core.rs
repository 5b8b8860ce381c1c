//! MorphCloudApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::window::Window;

use morphcloud_config::CloudConfig;
use morphcloud_core::{AutoMorphScheduler, CloudSlot};
use morphcloud_renderer::{FrameTimer, RenderState};

/// Top-level application state.
pub struct MorphCloudApp {
    pub(super) config: CloudConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Cloud and its drivers
    pub(super) cloud: CloudSlot,
    pub(super) scheduler: AutoMorphScheduler,
    pub(super) rng: StdRng,

    // Timing
    pub(super) start: Instant,
    pub(super) frame_timer: FrameTimer,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl MorphCloudApp {
    pub fn new(config: CloudConfig) -> Self {
        let rng = match config.shapes.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scheduler = AutoMorphScheduler::new(
            config.morph.interval as f32,
            0.0,
            config.morph.auto_cycle,
        );
        Self {
            config,
            window: None,
            render_state: None,
            cloud: CloudSlot::Empty,
            scheduler,
            rng,
            start: Instant::now(),
            frame_timer: FrameTimer::new(),
            should_exit: false,
        }
    }

    /// Seconds since the app started; the cloud clock.
    pub(super) fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
