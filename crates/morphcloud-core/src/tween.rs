//! Time-based interpolation of progress and colors.
//!
//! A [`Tween`] is plain data: start value, end value, start time, duration
//! and an easing curve. Sampling it at a clock value yields the eased output;
//! there is no callback engine and nothing runs in the background. Starting a
//! new animation means replacing the tween.

use morphcloud_common::Rgb;

use crate::math::{mix, mix3, Point3};

/// Easing curve applied to normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^2`: fast start, gentle landing.
    #[default]
    QuadOut,
    CubicInOut,
}

impl Easing {
    /// Map `t` in `[0, 1]` to eased progress in `[0, 1]`. Monotonic.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, other: Self, t: f32) -> Self {
        mix(self, other, t)
    }
}

impl Lerp for Point3 {
    fn lerp(self, other: Self, t: f32) -> Self {
        mix3(self, other, t)
    }
}

/// Interpolates in linear light; endpoints are returned unchanged.
impl Lerp for Rgb {
    fn lerp(self, other: Self, t: f32) -> Self {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        let mixed = mix3(self.to_linear().into(), other.to_linear().into(), t);
        Rgb::from_linear(Rgb::from(mixed))
    }
}

/// A fixed-duration interpolation from `from` to `to`, starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    start: f32,
    duration: f32,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// A tween that has already finished at `value`.
    pub fn constant(value: T) -> Self {
        Self::new(value, value, 0.0, 0.0, Easing::Linear)
    }

    /// Normalized, un-eased time in `[0, 1]`.
    pub fn fraction(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Eased value at clock `now`. Returns exactly `to` once finished.
    pub fn sample(&self, now: f32) -> T {
        let t = self.fraction(now);
        if t >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, self.easing.apply(t))
        }
    }

    /// Move the start to `start`, keeping both endpoints and the duration.
    pub fn restart_at(&mut self, start: f32) {
        self.start = start;
    }

    pub fn is_finished(&self, now: f32) -> bool {
        self.fraction(now) >= 1.0
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

// =============================================================================
// Tests
// =============================================================================
