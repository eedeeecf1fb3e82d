// src/effects/placeholder_fx.rs
//
// Time-based fades for the input's decorations: the placeholder swap
// and the submit affordance intensity.

use crate::utilities::easing::{ease, lerp, EasingType};

pub const PLACEHOLDER_FADE_DURATION: f32 = 0.3;
const ENTER_OFFSET: f32 = 5.0;
const EXIT_OFFSET: f32 = -15.0;

/// What to draw for the placeholder at a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderFrame {
    pub index: usize,
    pub offset_y: f32, // screen pixels, positive is down
    pub opacity: f32,
}

/// Swaps placeholders in "wait" mode: the outgoing hint finishes its exit
/// before the incoming one starts entering.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderFade {
    previous: Option<usize>,
    current: usize,
    start_time: f32,
    duration: f32,
    is_active: bool,
}

impl PlaceholderFade {
    pub fn new() -> Self {
        Self {
            duration: PLACEHOLDER_FADE_DURATION,
            ..Default::default()
        }
    }

    /// `previous` is None on first display, which only plays the enter phase.
    pub fn start(&mut self, previous: Option<usize>, current: usize, current_time: f32) {
        self.previous = previous;
        self.current = current;
        self.start_time = current_time;
        self.is_active = true;
    }

    pub fn is_active(&self, current_time: f32) -> bool {
        self.is_active && current_time - self.start_time < self.total_duration()
    }

    fn total_duration(&self) -> f32 {
        if self.previous.is_some() {
            self.duration * 2.0
        } else {
            self.duration
        }
    }

    pub fn sample(&self, current_time: f32) -> PlaceholderFrame {
        let settled = PlaceholderFrame {
            index: self.current,
            offset_y: 0.0,
            opacity: 1.0,
        };
        if !self.is_active {
            return settled;
        }

        let mut elapsed = current_time - self.start_time;
        if let Some(previous) = self.previous {
            if elapsed < self.duration {
                let t = ease(EasingType::Linear, elapsed / self.duration);
                return PlaceholderFrame {
                    index: previous,
                    offset_y: lerp(0.0, EXIT_OFFSET, t),
                    opacity: 1.0 - t,
                };
            }
            elapsed -= self.duration;
        }

        if elapsed >= self.duration {
            return settled;
        }
        let t = ease(EasingType::Linear, elapsed / self.duration);
        PlaceholderFrame {
            index: self.current,
            offset_y: lerp(ENTER_OFFSET, 0.0, t),
            opacity: t,
        }
    }
}

/// Eases a scalar toward a target, restarting from wherever it currently is.
#[derive(Debug, Clone)]
pub struct IntensityFade {
    from: f32,
    to: f32,
    start_time: f32,
    duration: f32,
}

impl IntensityFade {
    pub fn new(initial: f32, duration: f32) -> Self {
        Self {
            from: initial,
            to: initial,
            start_time: 0.0,
            duration,
        }
    }

    pub fn set_target(&mut self, target: f32, current_time: f32) {
        if (target - self.to).abs() < f32::EPSILON {
            return;
        }
        self.from = self.value(current_time);
        self.to = target;
        self.start_time = current_time;
    }

    pub fn value(&self, current_time: f32) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ease(
            EasingType::EaseInOut,
            (current_time - self.start_time) / self.duration,
        );
        lerp(self.from, self.to, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_display_only_enters() {
        let mut fade = PlaceholderFade::new();
        fade.start(None, 0, 10.0);
        let frame = fade.sample(10.0);
        assert_eq!(frame.index, 0);
        assert_eq!(frame.offset_y, ENTER_OFFSET);
        assert_eq!(frame.opacity, 0.0);
        assert_eq!(fade.sample(10.3).opacity, 1.0);
        assert!(!fade.is_active(10.3));
    }

    #[test]
    fn test_swap_waits_for_exit() {
        let mut fade = PlaceholderFade::new();
        fade.start(Some(0), 1, 0.0);

        let exiting = fade.sample(0.15);
        assert_eq!(exiting.index, 0);
        assert!((exiting.offset_y - EXIT_OFFSET / 2.0).abs() < 1e-4);
        assert!((exiting.opacity - 0.5).abs() < 1e-4);

        let entering = fade.sample(0.45);
        assert_eq!(entering.index, 1);
        assert!((entering.offset_y - ENTER_OFFSET / 2.0).abs() < 1e-4);
        assert!((entering.opacity - 0.5).abs() < 1e-4);

        let settled = fade.sample(1.0);
        assert_eq!(settled.index, 1);
        assert_eq!(settled.opacity, 1.0);
        assert!(fade.is_active(0.59));
        assert!(!fade.is_active(0.6));
    }

    #[test]
    fn test_idle_fade_is_settled() {
        let fade = PlaceholderFade::new();
        assert_eq!(
            fade.sample(3.0),
            PlaceholderFrame {
                index: 0,
                offset_y: 0.0,
                opacity: 1.0
            }
        );
    }

    #[test]
    fn test_intensity_fade() {
        let mut fade = IntensityFade::new(0.5, 0.3);
        assert_eq!(fade.value(0.0), 0.5);
        fade.set_target(1.0, 1.0);
        assert_eq!(fade.value(1.0), 0.5);
        assert!((fade.value(1.15) - 0.75).abs() < 1e-4);
        assert_eq!(fade.value(2.0), 1.0);

        // retargeting mid-way starts from the current value
        fade.set_target(0.5, 2.0);
        fade.set_target(1.0, 2.15);
        assert!((fade.value(2.15) - 0.75).abs() < 1e-4);
    }
}
