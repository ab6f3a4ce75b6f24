//! Wall-clock to logical-time mapping, with pause and speed control.
//!
//! The engine itself only understands logical time (a `Duration` since
//! start). `PlaybackClock` is the front-end's bridge: it scales elapsed
//! wall time by the speed multiplier and freezes while paused. Wall
//! instants are always passed in, never read here, so the mapping is
//! testable without sleeping.

use std::time::{Duration, Instant};

/// Maps wall instants onto the engine's logical timeline.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    /// Wall instant of the last pause/resume/speed change.
    anchor: Instant,
    /// Logical time at the anchor.
    logical_at_anchor: Duration,
    speed: f64,
    paused: bool,
}

impl PlaybackClock {
    pub const MIN_SPEED: f64 = 0.1;
    pub const MAX_SPEED: f64 = 16.0;
    pub const SPEED_STEP: f64 = 1.5;

    /// Create a running clock anchored at `start`, with `speed` clamped
    /// to the supported range.
    pub fn new(start: Instant, speed: f64) -> Self {
        Self {
            anchor: start,
            logical_at_anchor: Duration::ZERO,
            speed: speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED),
            paused: false,
        }
    }

    /// Logical time at wall instant `wall`.
    pub fn now(&self, wall: Instant) -> Duration {
        if self.paused {
            return self.logical_at_anchor;
        }
        self.logical_at_anchor + wall.duration_since(self.anchor).mul_f64(self.speed)
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Pause or resume at wall instant `wall`.
    pub fn toggle_pause(&mut self, wall: Instant) {
        self.rebase(wall);
        self.paused = !self.paused;
    }

    /// Increase speed one step (capped at [`MAX_SPEED`](Self::MAX_SPEED)).
    pub fn speed_up(&mut self, wall: Instant) {
        self.rebase(wall);
        self.speed = (self.speed * Self::SPEED_STEP).min(Self::MAX_SPEED);
    }

    /// Decrease speed one step (floored at [`MIN_SPEED`](Self::MIN_SPEED)).
    pub fn speed_down(&mut self, wall: Instant) {
        self.rebase(wall);
        self.speed = (self.speed / Self::SPEED_STEP).max(Self::MIN_SPEED);
    }

    /// Wall-clock wait until logical time `due` is reached; `None` while
    /// paused (the deadline will never arrive on its own).
    pub fn wall_until(&self, wall: Instant, due: Duration) -> Option<Duration> {
        if self.paused {
            return None;
        }
        let now = self.now(wall);
        if due <= now {
            return Some(Duration::ZERO);
        }
        Some((due - now).div_f64(self.speed))
    }

    /// Re-anchor so past elapsed time keeps its old rate.
    fn rebase(&mut self, wall: Instant) {
        self.logical_at_anchor = self.now(wall);
        self.anchor = wall;
    }
}
