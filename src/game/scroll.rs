//! Pipe scrolling and the pass-the-pipe score trigger.

use super::physics::is_usable_delta;
use crate::constants::{SCROLL_DURATION_MS, SCROLL_END_OFFSET};

/// Looping linear scroll from `start` to `end` over `duration_ms`, then an
/// instant jump back to `start`.
///
/// Driven by the same frame deltas as the physics: elapsed time is kept
/// modulo the period and the offset is interpolated from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    start: f64,
    /// Start for the next pass, applied when the loop wraps.
    pending_start: Option<f64>,
    end: f64,
    duration_ms: f64,
    elapsed_ms: f64,
    running: bool,
}

impl ScrollAnimation {
    /// A running animation starting at `start` and ending at the default end offset.
    pub fn new(start: f64) -> Self {
        Self {
            start,
            pending_start: None,
            end: SCROLL_END_OFFSET,
            duration_ms: SCROLL_DURATION_MS,
            elapsed_ms: 0.0,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time into the current pass, always in `[0, duration)`.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Offset for the current point in the loop.
    pub fn offset(&self) -> f64 {
        let t = self.elapsed_ms / self.duration_ms;
        self.start + (self.end - self.start) * t
    }

    /// Move the animation forward and return the new offset.
    ///
    /// Returns `None` when cancelled or when the delta is unusable, in which
    /// case the caller must leave the scroll offset alone.
    pub fn advance(&mut self, dt_millis: f64) -> Option<f64> {
        if !self.running || !is_usable_delta(dt_millis) {
            return None;
        }
        let next = self.elapsed_ms + dt_millis;
        if next >= self.duration_ms {
            if let Some(start) = self.pending_start.take() {
                self.start = start;
            }
        }
        self.elapsed_ms = next % self.duration_ms;
        Some(self.offset())
    }

    /// Stop mutating the offset. The last value stays frozen.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Start a new loop from `start` at time zero.
    pub fn restart(&mut self, start: f64) {
        self.start = start;
        self.pending_start = None;
        self.elapsed_ms = 0.0;
        self.running = true;
    }

    /// Change where future passes begin. The current pass keeps its start so
    /// the offset stays continuous until the next wrap.
    pub fn set_start(&mut self, start: f64) {
        self.pending_start = Some(start);
    }
}

/// Detects the scroll offset crossing the bird's anchor moving left.
///
/// Only the previous and current samples are compared, so a crossing that
/// happens entirely between two frames on the same side is not seen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreTrigger {
    previous: Option<f64>,
}

impl ScoreTrigger {
    /// A trigger with no previous sample. The first observation never fires.
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// A trigger whose previous sample is `offset`.
    pub fn primed(offset: f64) -> Self {
        Self {
            previous: Some(offset),
        }
    }

    pub fn previous(&self) -> Option<f64> {
        self.previous
    }

    /// Record `current` and report whether it completed a leftward crossing of `mid`.
    pub fn observe(&mut self, current: f64, mid: f64) -> bool {
        let crossed = match self.previous {
            Some(previous) => current != previous && previous > mid && current < mid,
            None => false,
        };
        self.previous = Some(current);
        crossed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_interpolates_linearly() {
        let mut anim = ScrollAnimation::new(450.0);
        assert_eq!(anim.offset(), 450.0);

        assert_eq!(anim.advance(1500.0), Some(150.0));
        assert_eq!(anim.elapsed_ms(), 1500.0);
    }

    #[test]
    fn test_offset_wraps_back_to_start() {
        let mut anim = ScrollAnimation::new(450.0);
        anim.advance(2900.0);
        let wrapped = anim.advance(200.0).expect("running");
        // 100ms into the second pass
        assert_eq!(anim.elapsed_ms(), 100.0);
        assert!(wrapped > 400.0);
    }

    #[test]
    fn test_large_delta_skips_whole_periods() {
        let mut anim = ScrollAnimation::new(450.0);
        anim.advance(3000.0 * 4.0 + 1500.0);
        assert_eq!(anim.offset(), 150.0);
    }

    #[test]
    fn test_cancel_freezes_offset() {
        let mut anim = ScrollAnimation::new(450.0);
        anim.advance(300.0);
        let frozen = anim.offset();
        anim.cancel();
        assert!(!anim.is_running());
        assert_eq!(anim.advance(500.0), None);
        assert_eq!(anim.offset(), frozen);
    }

    #[test]
    fn test_restart_resets_time() {
        let mut anim = ScrollAnimation::new(450.0);
        anim.advance(1000.0);
        anim.cancel();
        anim.restart(600.0);
        assert!(anim.is_running());
        assert_eq!(anim.elapsed_ms(), 0.0);
        assert_eq!(anim.offset(), 600.0);
    }

    #[test]
    fn test_set_start_waits_for_wrap() {
        let mut anim = ScrollAnimation::new(450.0);
        anim.advance(1500.0);
        anim.set_start(900.0);
        assert_eq!(anim.offset(), 150.0);

        // Still the old pass: 450 -> -150
        assert_eq!(anim.advance(750.0), Some(0.0));
        // Wrap lands 100ms into a pass starting at 900
        let wrapped = anim.advance(850.0).expect("running");
        assert_eq!(anim.elapsed_ms(), 100.0);
        assert!(wrapped > 850.0);
    }

    #[test]
    fn test_restart_drops_pending_start() {
        let mut anim = ScrollAnimation::new(450.0);
        anim.set_start(900.0);
        anim.restart(600.0);
        anim.advance(3000.0);
        assert_eq!(anim.offset(), 600.0);
    }

    #[test]
    fn test_zero_delta_does_not_move() {
        let mut anim = ScrollAnimation::new(450.0);
        assert_eq!(anim.advance(0.0), None);
        assert_eq!(anim.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_score_sequence_counts_each_crossing_once() {
        let mut trigger = ScoreTrigger::new();
        let mut score = 0;
        for offset in [300.0, 150.0, 50.0, -10.0, 400.0, 150.0, 50.0] {
            if trigger.observe(offset, 100.0) {
                score += 1;
            }
        }
        assert_eq!(score, 2);
    }

    #[test]
    fn test_reset_jump_does_not_score() {
        let mut trigger = ScoreTrigger::primed(50.0);
        assert!(!trigger.observe(400.0, 100.0));
    }

    #[test]
    fn test_repeated_value_does_not_score() {
        let mut trigger = ScoreTrigger::primed(150.0);
        assert!(trigger.observe(50.0, 100.0));
        assert!(!trigger.observe(50.0, 100.0));
    }

    #[test]
    fn test_landing_on_anchor_is_not_a_crossing() {
        let mut trigger = ScoreTrigger::primed(150.0);
        assert!(!trigger.observe(100.0, 100.0));
        assert!(!trigger.observe(50.0, 100.0));
    }

    #[test]
    fn test_first_observation_never_fires() {
        let mut trigger = ScoreTrigger::new();
        assert!(!trigger.observe(50.0, 100.0));
        assert_eq!(trigger.previous(), Some(50.0));
    }
}
