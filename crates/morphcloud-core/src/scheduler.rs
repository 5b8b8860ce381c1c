//! Auto-morph scheduler and random palette helpers.
//!
//! The scheduler does not own a timer. The host polls it each frame with
//! the current clock, and it answers with a shape to request when an
//! interval has elapsed.

use morphcloud_common::Rgb;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct AutoMorphScheduler {
    interval: f32,
    next_fire: f32,
    enabled: bool,
}

impl AutoMorphScheduler {
    /// First fire happens one `interval` after `start`.
    pub fn new(interval: f32, start: f32, enabled: bool) -> Self {
        Self {
            interval,
            next_fire: start + interval,
            enabled,
        }
    }

    /// Returns the shape to request if an interval elapsed by `now`.
    ///
    /// Intervals missed while the host was stalled collapse into one fire.
    pub fn poll<R: Rng + ?Sized>(
        &mut self,
        now: f32,
        current: usize,
        shape_count: usize,
        rng: &mut R,
    ) -> Option<usize> {
        if !self.enabled || shape_count == 0 || now < self.next_fire {
            return None;
        }
        self.next_fire = now + self.interval;
        Some(pick_target(current, shape_count, rng))
    }

    /// Enabling restarts the countdown from `now`.
    pub fn set_enabled(&mut self, enabled: bool, now: f32) {
        if enabled && !self.enabled {
            self.next_fire = now + self.interval;
        }
        self.enabled = enabled;
    }

    /// Flip auto-cycling and return the new state.
    pub fn toggle(&mut self, now: f32) -> bool {
        self.set_enabled(!self.enabled, now);
        self.enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }
}

/// Uniform pick from `0..count` excluding `current`.
///
/// A one-shape catalog can only morph to itself.
pub fn pick_target<R: Rng + ?Sized>(current: usize, count: usize, rng: &mut R) -> usize {
    if count <= 1 {
        return 0;
    }
    if current >= count {
        return rng.gen_range(0..count);
    }
    let pick = rng.gen_range(0..count - 1);
    if pick >= current {
        pick + 1
    } else {
        pick
    }
}

/// Random color whose six hex digits each come from the first `digits`
/// entries of `0..=F`. Fewer digits bias away from bright channels.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R, digits: usize) -> Rgb {
    let digits = digits.clamp(1, 16) as u8;
    let mut nibble = || rng.gen_range(0..digits);
    let mut byte = || (nibble() << 4) | nibble();
    let (r, g, b) = (byte(), byte(), byte());
    Rgb::from_bytes(r, g, b)
}

/// A fresh `(A, B)` pair: A over all 16 digits, B over the first 15 so it
/// can never be pure white.
pub fn random_palette<R: Rng + ?Sized>(rng: &mut R) -> (Rgb, Rgb) {
    (random_color(rng, 16), random_color(rng, 15))
}

// =============================================================================
// Tests
// =============================================================================
