//! Fixed-duration slide tween.
//!
//! The view interpolates every record of the animation trace between its
//! source and destination cell while the tween runs. Time is fed in as elapsed
//! milliseconds so the clock is testable without sleeping.

use crate::types::TileAnimation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tween {
    duration_ms: u32,
    elapsed_ms: u32,
    running: bool,
}

impl Tween {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            elapsed_ms: 0,
            running: false,
        }
    }

    /// Restart from zero. A zero-length tween finishes immediately.
    pub fn start(&mut self) {
        self.elapsed_ms = 0;
        self.running = self.duration_ms > 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_ms = self.duration_ms;
    }

    /// Advance the clock; returns true on the call that finishes the tween.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= self.duration_ms {
            self.stop();
            return true;
        }
        false
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Completed fraction in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms as f32 / self.duration_ms as f32).min(1.0)
    }
}

/// Position of an animated tile, in fractional cells, at progress `t`.
pub fn lerp_cell(anim: &TileAnimation, t: f32) -> (f32, f32) {
    let t = t.clamp(0.0, 1.0);
    let row = anim.from_row as f32 + (anim.to_row as f32 - anim.from_row as f32) * t;
    let col = anim.from_col as f32 + (anim.to_col as f32 - anim.from_col as f32) * t;
    (row, col)
}
