//! Color State: the two blend endpoints, tweened when changed.

use morphcloud_common::Rgb;

use crate::tween::{Easing, Tween};

/// Which blend endpoint a color change targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    /// Shown where the smoothed noise is 0.
    A,
    /// Shown where the smoothed noise is 1.
    B,
}

#[derive(Debug, Clone)]
pub struct ColorState {
    a: Tween<Rgb>,
    b: Tween<Rgb>,
    duration: f32,
    easing: Easing,
}

impl ColorState {
    pub fn new(color_a: Rgb, color_b: Rgb, duration: f32) -> Self {
        Self {
            a: Tween::constant(color_a),
            b: Tween::constant(color_b),
            duration,
            easing: Easing::default(),
        }
    }

    /// Retarget `slot` to `color`, starting from whatever is displayed at
    /// `now`. A zero transition duration snaps.
    pub fn set(&mut self, slot: ColorSlot, color: Rgb, now: f32) {
        let tween = match slot {
            ColorSlot::A => &mut self.a,
            ColorSlot::B => &mut self.b,
        };
        let displayed = tween.sample(now);
        *tween = Tween::new(displayed, color, now, self.duration, self.easing);
        tracing::debug!(?slot, color = %color.to_hex(), "Color retargeted");
    }

    /// Re-anchor `slot`'s tween so it starts at `now`.
    pub fn restart_at(&mut self, slot: ColorSlot, now: f32) {
        match slot {
            ColorSlot::A => self.a.restart_at(now),
            ColorSlot::B => self.b.restart_at(now),
        }
    }

    /// Displayed `(A, B)` at clock `now`.
    pub fn sample(&self, now: f32) -> (Rgb, Rgb) {
        (self.a.sample(now), self.b.sample(now))
    }

    /// The color `slot` is heading to.
    pub fn target(&self, slot: ColorSlot) -> Rgb {
        match slot {
            ColorSlot::A => self.a.target(),
            ColorSlot::B => self.b.target(),
        }
    }

    pub fn set_duration(&mut self, duration: f32) {
        self.duration = duration.max(0.0);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Rgb {
        Rgb::new(1.0, 0.0, 0.0)
    }

    fn blue() -> Rgb {
        Rgb::new(0.0, 0.0, 1.0)
    }

    #[test]
    fn initial_colors_are_shown_immediately() {
        let colors = ColorState::new(red(), blue(), 2.5);
        assert_eq!(colors.sample(0.0), (red(), blue()));
    }

    #[test]
    fn set_tweens_rather_than_snaps() {
        let mut colors = ColorState::new(red(), blue(), 2.0);
        colors.set(ColorSlot::A, blue(), 1.0);
        let (a, b) = colors.sample(1.0);
        assert_eq!(a, red());
        assert_eq!(b, blue());

        let (mid, _) = colors.sample(2.0);
        assert!(mid.r > 0.0 && mid.r < 1.0);
        assert!(mid.b > 0.0 && mid.b < 1.0);

        assert_eq!(colors.sample(3.0).0, blue());
        assert_eq!(colors.target(ColorSlot::A), blue());
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let mut colors = ColorState::new(red(), blue(), 2.0);
        colors.set(ColorSlot::B, red(), 0.0);
        let (_, shown) = colors.sample(1.0);

        colors.set(ColorSlot::B, Rgb::new(0.0, 1.0, 0.0), 1.0);
        assert_eq!(colors.sample(1.0).1, shown);
    }

    #[test]
    fn restart_keeps_endpoints() {
        let mut colors = ColorState::new(red(), blue(), 2.0);
        colors.set(ColorSlot::A, blue(), 1.0);
        colors.restart_at(ColorSlot::A, 5.0);
        assert_eq!(colors.sample(5.0).0, red());
        assert_eq!(colors.sample(7.0).0, blue());
    }

    #[test]
    fn zero_duration_snaps() {
        let mut colors = ColorState::new(red(), blue(), 0.0);
        colors.set(ColorSlot::B, red(), 4.0);
        assert_eq!(colors.sample(4.0).1, red());
    }

    #[test]
    fn negative_duration_is_clamped() {
        let mut colors = ColorState::new(red(), blue(), 1.0);
        colors.set_duration(-3.0);
        colors.set(ColorSlot::A, blue(), 0.0);
        assert_eq!(colors.sample(0.0).0, blue());
    }
}
