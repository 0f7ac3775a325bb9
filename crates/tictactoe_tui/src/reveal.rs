//! Per-cell reveal animation progress.
//!
//! Purely presentational: the round has already moved on by the time a
//! mark finishes drawing.

use std::time::{Duration, Instant};
use tictactoe_round::Position;

/// Tracks when each cell's reveal started.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    started: [Option<Instant>; 9],
    duration: Duration,
}

impl RevealTracker {
    /// Creates a tracker where reveals take `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            started: [None; 9],
            duration,
        }
    }

    /// Starts (or restarts) the reveal of `pos` at `now`.
    pub fn start(&mut self, pos: Position, now: Instant) {
        self.started[pos.index()] = Some(now);
    }

    /// Linear progress in `[0, 1]`; 0 for cells never started.
    pub fn progress(&self, pos: Position, now: Instant) -> f64 {
        let Some(start) = self.started[pos.index()] else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// True while any started reveal is below full progress.
    pub fn is_animating(&self, now: Instant) -> bool {
        Position::ALL.into_iter().any(|pos| {
            self.started[pos.index()].is_some() && self.progress(pos, now) < 1.0
        })
    }

    /// Forgets every reveal, e.g. when the board clears.
    pub fn clear(&mut self) {
        self.started = [None; 9];
    }
}
