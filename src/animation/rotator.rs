// src/animation/rotator.rs
//
// Cycles the input's placeholder hints on a fixed interval while the
// window is visible.

use std::time::Duration;
use tracing::debug;

use super::{Scheduler, TimerId};
use crate::models::PlaceholderSet;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug)]
pub struct PlaceholderRotator {
    placeholders: PlaceholderSet,
    period: Duration,
    index: usize,
    timer: Option<TimerId>,
    visible: bool,
}

impl PlaceholderRotator {
    pub fn new(placeholders: PlaceholderSet, period: Duration) -> Self {
        Self {
            placeholders,
            period,
            index: 0,
            timer: None,
            visible: true,
        }
    }

    /// Starts rotating. Sets with fewer than two hints never get a timer.
    pub fn start(&mut self, scheduler: &mut Scheduler) {
        if self.timer.is_some() || !self.visible || self.placeholders.len() < 2 {
            return;
        }
        self.timer = scheduler.set_interval(self.period);
    }

    pub fn stop(&mut self, scheduler: &mut Scheduler) {
        if let Some(id) = self.timer.take() {
            scheduler.clear_interval(id);
        }
    }

    /// Advances to the next hint when `id` is this rotator's timer.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) || self.placeholders.len() < 2 {
            return false;
        }
        self.index = (self.index + 1) % self.placeholders.len();
        true
    }

    /// Hidden windows pause the rotation. Becoming visible restarts a
    /// full period from the current hint.
    pub fn set_visible(&mut self, scheduler: &mut Scheduler, visible: bool) {
        self.visible = visible;
        if visible {
            self.start(scheduler);
        } else {
            self.stop(scheduler);
        }
    }

    pub fn set_placeholders(&mut self, scheduler: &mut Scheduler, placeholders: PlaceholderSet) {
        self.stop(scheduler);
        debug!(count = placeholders.len(), "placeholders replaced");
        self.placeholders = placeholders;
        self.index = 0;
        self.start(scheduler);
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&str> {
        self.placeholders.get(self.index)
    }

    pub fn placeholders(&self) -> &PlaceholderSet {
        &self.placeholders
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rotator(hints: &[&str]) -> (PlaceholderRotator, Scheduler) {
        let mut scheduler = Scheduler::new();
        let mut rotator = PlaceholderRotator::new(
            PlaceholderSet::new(hints.iter().copied()),
            DEFAULT_INTERVAL,
        );
        rotator.start(&mut scheduler);
        (rotator, scheduler)
    }

    fn tick(rotator: &mut PlaceholderRotator, scheduler: &mut Scheduler, dt: Duration) {
        for id in scheduler.advance(dt) {
            rotator.on_timer(id);
        }
    }

    #[test]
    fn test_short_sets_never_start_a_timer() {
        for hints in [&[][..], &["only"][..]] {
            let (mut rotator, mut scheduler) = rotator(hints);
            assert_eq!(scheduler.active_intervals(), 0);
            tick(&mut rotator, &mut scheduler, DEFAULT_INTERVAL * 10);
            assert_eq!(rotator.index(), 0);
        }
    }

    #[test]
    fn test_sequence_wraps() {
        let (mut rotator, mut scheduler) = rotator(&["a", "b", "c"]);
        let mut shown = vec![rotator.current().unwrap().to_string()];
        for _ in 0..4 {
            tick(&mut rotator, &mut scheduler, DEFAULT_INTERVAL);
            shown.push(rotator.current().unwrap().to_string());
        }
        assert_eq!(shown, vec!["a", "b", "c", "a", "b"]);
    }

    #[test]
    fn test_hidden_pauses_without_skipping() {
        let (mut rotator, mut scheduler) = rotator(&["a", "b", "c"]);
        tick(&mut rotator, &mut scheduler, Duration::from_millis(2900));
        rotator.set_visible(&mut scheduler, false);
        assert_eq!(scheduler.active_intervals(), 0);
        tick(&mut rotator, &mut scheduler, DEFAULT_INTERVAL * 5);
        assert_eq!(rotator.index(), 0);

        // a repeated visible event must not create a second timer
        rotator.set_visible(&mut scheduler, true);
        rotator.set_visible(&mut scheduler, true);
        assert_eq!(scheduler.active_intervals(), 1);

        // the pre-pause 2.9s do not carry over
        tick(&mut rotator, &mut scheduler, Duration::from_millis(200));
        assert_eq!(rotator.index(), 0);
        tick(&mut rotator, &mut scheduler, Duration::from_millis(2800));
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn test_replacing_placeholders_clears_old_timer() {
        let (mut rotator, mut scheduler) = rotator(&["a", "b"]);
        tick(&mut rotator, &mut scheduler, DEFAULT_INTERVAL);
        assert_eq!(rotator.index(), 1);

        rotator.set_placeholders(&mut scheduler, PlaceholderSet::new(["x", "y", "z"]));
        assert_eq!(scheduler.active_intervals(), 1);
        assert_eq!(rotator.current(), Some("x"));

        rotator.set_placeholders(&mut scheduler, PlaceholderSet::new(["solo"]));
        assert_eq!(scheduler.active_intervals(), 0);
        assert!(!rotator.is_running());
    }

    #[test]
    fn test_foreign_timer_is_ignored() {
        let (mut rotator, mut scheduler) = rotator(&["a", "b"]);
        let other = scheduler.set_interval(Duration::from_millis(10)).unwrap();
        assert!(!rotator.on_timer(other));
        assert_eq!(rotator.index(), 0);
    }

    proptest! {
        #[test]
        fn prop_index_is_fires_mod_len(len in 2usize..12, fires in 0u32..64) {
            let hints: Vec<String> = (0..len).map(|i| format!("hint {i}")).collect();
            let mut scheduler = Scheduler::new();
            let mut rotator = PlaceholderRotator::new(PlaceholderSet::new(hints), DEFAULT_INTERVAL);
            rotator.start(&mut scheduler);
            for _ in 0..fires {
                tick(&mut rotator, &mut scheduler, DEFAULT_INTERVAL);
            }
            prop_assert_eq!(rotator.index(), fires as usize % len);
        }
    }
}
