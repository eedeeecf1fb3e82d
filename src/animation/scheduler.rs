// src/animation/scheduler.rs
//
// Deterministic replacement for interval timers and animation-frame
// callbacks. The host advances the clock and drains at most one frame
// per rendered frame; nothing fires on its own.

use std::time::Duration;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

#[derive(Debug)]
struct Interval {
    id: TimerId,
    period: Duration,
    elapsed: Duration, // time since the last firing
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    intervals: Vec<Interval>,
    pending_frame: Option<FrameId>,
    torn_down: bool,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Registers a repeating timer. Refused after teardown or for a zero period.
    pub fn set_interval(&mut self, period: Duration) -> Option<TimerId> {
        if self.torn_down || period.is_zero() {
            return None;
        }
        let id = TimerId(self.next_id());
        self.intervals.push(Interval {
            id,
            period,
            elapsed: Duration::ZERO,
        });
        trace!(?id, ?period, "interval set");
        Some(id)
    }

    pub fn clear_interval(&mut self, id: TimerId) -> bool {
        let before = self.intervals.len();
        self.intervals.retain(|interval| interval.id != id);
        before != self.intervals.len()
    }

    pub fn active_intervals(&self) -> usize {
        self.intervals.len()
    }

    /// Moves the clock forward by `dt` and returns every interval firing
    /// in chronological order. Ties keep registration order.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerId> {
        if self.torn_down {
            return Vec::new();
        }
        let mut fired: Vec<(Duration, TimerId)> = Vec::new();
        for interval in self.intervals.iter_mut() {
            let total = interval.elapsed + dt;
            let count = total.as_nanos() / interval.period.as_nanos();
            for k in 1..=count {
                let at = interval.period * k as u32 - interval.elapsed;
                fired.push((at, interval.id));
            }
            interval.elapsed = total - interval.period * count as u32;
        }
        fired.sort_by_key(|(at, _)| *at);
        fired.into_iter().map(|(_, id)| id).collect()
    }

    /// Requests the next animation frame. Only one frame can be pending, so
    /// a second request before the frame runs returns the same id.
    pub fn request_frame(&mut self) -> Option<FrameId> {
        if self.torn_down {
            return None;
        }
        if let Some(id) = self.pending_frame {
            return Some(id);
        }
        let id = FrameId(self.next_id());
        self.pending_frame = Some(id);
        Some(id)
    }

    pub fn cancel_frame(&mut self, id: FrameId) -> bool {
        if self.pending_frame == Some(id) {
            self.pending_frame = None;
            true
        } else {
            false
        }
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    /// Hands the pending frame to the caller, if any.
    pub fn take_frame(&mut self) -> Option<FrameId> {
        self.pending_frame.take()
    }

    /// Drops every timer and frame; later requests are refused.
    pub fn teardown(&mut self) {
        self.intervals.clear();
        self.pending_frame = None;
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
