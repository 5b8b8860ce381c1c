//! Frame timing and FPS reporting.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Rolling window of frame durations.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    last_report: Instant,
    max_samples: usize,
}

impl FrameTimer {
    /// Create a new frame timer with a default 120-sample rolling window.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_times: VecDeque::new(),
            last_frame: now,
            last_report: now,
            max_samples: 120,
        }
    }

    /// Record the start of a new frame and return seconds since the previous
    /// one. Call this once per frame.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        dt.as_secs_f32()
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total = self.total_secs();
        if self.frame_times.is_empty() || total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        (self.total_secs() / self.frame_times.len() as f64) * 1000.0
    }

    /// Number of frame samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// Log the rolling FPS at `debug` at most once per `every`.
    pub fn report_if_due(&mut self, every: Duration) -> bool {
        if self.last_report.elapsed() < every {
            return false;
        }
        self.last_report = Instant::now();
        tracing::debug!(
            fps = format_args!("{:.1}", self.fps()),
            frame_ms = format_args!("{:.2}", self.frame_time_ms()),
            "Frame timing"
        );
        true
    }

    fn total_secs(&self) -> f64 {
        self.frame_times.iter().map(|d| d.as_secs_f64()).sum()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
