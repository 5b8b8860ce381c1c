use morphcloud_common::MorphError;

use crate::tween::{Easing, Tween};

/// Which normalized buffers feed the shader's "current" and "target" slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeBindings {
    pub current: usize,
    pub target: usize,
}

/// Current/target indices plus the progress tween.
///
/// `current_index` records the last *requested* shape: it switches the moment
/// a morph begins, not when progress reaches 1. A new morph replaces the
/// running tween and restarts progress at 0.
#[derive(Debug, Clone)]
pub struct MorphState {
    shape_count: usize,
    current_index: usize,
    bindings: AttributeBindings,
    tween: Tween<f32>,
    progress: f32,
    duration: f32,
    easing: Easing,
}

impl MorphState {
    /// Start at rest on `initial`: both bindings point at it and progress is 0.
    pub fn new(initial: usize, shape_count: usize, duration: f32) -> Result<Self, MorphError> {
        check_index(initial, shape_count)?;
        Ok(Self {
            shape_count,
            current_index: initial,
            bindings: AttributeBindings {
                current: initial,
                target: initial,
            },
            tween: Tween::constant(0.0),
            progress: 0.0,
            duration,
            easing: Easing::default(),
        })
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Begin a morph to `target` at clock `now`.
    pub fn begin(&mut self, target: usize, now: f32) -> Result<(), MorphError> {
        check_index(target, self.shape_count)?;

        self.bindings = AttributeBindings {
            current: self.current_index,
            target,
        };
        self.current_index = target;
        self.progress = 0.0;
        self.tween = Tween::new(0.0, 1.0, now, self.duration, self.easing);

        tracing::debug!(
            from = self.bindings.current,
            to = target,
            duration = self.duration,
            "Morph started"
        );
        Ok(())
    }

    /// Re-anchor the running ramp so it starts at `now`.
    pub fn restart_at(&mut self, now: f32) {
        self.tween.restart_at(now);
    }

    /// Sample the progress tween at clock `now`.
    pub fn update(&mut self, now: f32) -> f32 {
        self.progress = self.tween.sample(now);
        self.progress
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// `true` while the last started tween has not yet reached 1.
    pub fn is_morphing(&self, now: f32) -> bool {
        !self.tween.is_finished(now)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn bindings(&self) -> AttributeBindings {
        self.bindings
    }

    pub fn shape_count(&self) -> usize {
        self.shape_count
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

fn check_index(index: usize, count: usize) -> Result<(), MorphError> {
    if index < count {
        Ok(())
    } else {
        Err(MorphError::InvalidShapeIndex { index, count })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest_on_initial_shape() {
        let state = MorphState::new(1, 4, 2.5).unwrap();
        assert_eq!(state.current_index(), 1);
        assert_eq!(
            state.bindings(),
            AttributeBindings {
                current: 1,
                target: 1
            }
        );
        assert_eq!(state.progress(), 0.0);
        assert!(!state.is_morphing(0.0));
    }

    #[test]
    fn initial_index_must_be_valid() {
        assert_eq!(
            MorphState::new(4, 4, 2.5).unwrap_err(),
            MorphError::InvalidShapeIndex { index: 4, count: 4 }
        );
    }

    #[test]
    fn begin_rebinds_and_switches_current_immediately() {
        let mut state = MorphState::new(0, 4, 2.5).unwrap();
        state.begin(2, 1.0).unwrap();
        assert_eq!(state.current_index(), 2);
        assert_eq!(
            state.bindings(),
            AttributeBindings {
                current: 0,
                target: 2
            }
        );
        assert_eq!(state.progress(), 0.0);
        assert!(state.is_morphing(1.0));
    }

    #[test]
    fn progress_reaches_one_after_duration() {
        let mut state = MorphState::new(0, 4, 2.5).unwrap();
        state.begin(2, 0.0).unwrap();
        assert_eq!(state.update(2.5), 1.0);
        assert!(!state.is_morphing(2.5));
        assert_eq!(state.update(10.0), 1.0);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut state = MorphState::new(0, 3, 2.5).unwrap();
        state.begin(1, 0.5).unwrap();
        let mut prev = 0.0;
        for frame in 0..=200 {
            let p = state.update(0.5 + frame as f32 / 60.0);
            assert!(p >= prev);
            assert!((0.0..=1.0).contains(&p));
            prev = p;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn retarget_restarts_progress() {
        let mut state = MorphState::new(0, 4, 2.5).unwrap();
        state.begin(1, 0.0).unwrap();
        assert!(state.update(1.0) > 0.5);

        state.begin(3, 1.0).unwrap();
        assert_eq!(state.progress(), 0.0);
        assert_eq!(state.update(1.0), 0.0);
        assert_eq!(
            state.bindings(),
            AttributeBindings {
                current: 1,
                target: 3
            }
        );
        assert_eq!(state.update(3.5), 1.0);
    }

    #[test]
    fn invalid_target_leaves_state_untouched() {
        let mut state = MorphState::new(0, 2, 2.5).unwrap();
        state.begin(1, 0.0).unwrap();
        state.update(1.0);
        let before = (state.current_index(), state.bindings(), state.progress());

        let err = state.begin(5, 1.2).unwrap_err();
        assert_eq!(err, MorphError::InvalidShapeIndex { index: 5, count: 2 });
        assert_eq!(
            (state.current_index(), state.bindings(), state.progress()),
            before
        );
        assert!(state.is_morphing(1.2));
    }

    #[test]
    fn self_morph_is_allowed() {
        let mut state = MorphState::new(2, 3, 2.5).unwrap();
        state.begin(2, 0.0).unwrap();
        assert_eq!(
            state.bindings(),
            AttributeBindings {
                current: 2,
                target: 2
            }
        );
        assert_eq!(state.update(2.5), 1.0);
    }

    #[test]
    fn linear_easing_is_selectable() {
        let mut state = MorphState::new(0, 2, 2.0).unwrap().with_easing(Easing::Linear);
        state.begin(1, 0.0).unwrap();
        assert!((state.update(1.0) - 0.5).abs() < 1e-6);
    }
}
