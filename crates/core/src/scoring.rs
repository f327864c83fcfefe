//! Scoring & leveling - score accumulation and speed progression.
//!
//! Each cleared line is worth `100 * level`. The level steps up when the
//! score crosses `level * 5000`, up to level 10, and the gravity period is
//! derived from it as `500 / level` milliseconds. Score arithmetic saturates
//! instead of wrapping, so the score never decreases or overflows.

use gridfall_types::{BASE_PERIOD_MS, LEVEL_THRESHOLD, MAX_LEVEL, POINTS_PER_LINE};

/// Score and level state for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    level: u32,
}

impl Progress {
    /// Fresh progress: zero score, level 1.
    pub fn new() -> Self {
        Self { score: 0, level: 1 }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current level, 1..=10.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Gravity period for the current level, in milliseconds.
    pub fn tick_period_ms(&self) -> u32 {
        BASE_PERIOD_MS / self.level
    }

    /// Award points for `lines` cleared by one landing.
    pub fn on_lines_cleared(&mut self, lines: u32) {
        let points = lines
            .saturating_mul(POINTS_PER_LINE)
            .saturating_mul(self.level);
        self.score = self.score.saturating_add(points);
    }

    /// Step the level up if the score has crossed the current threshold.
    ///
    /// Returns true iff the level changed; the caller reschedules the game
    /// clock on that signal. At most one step per call: thresholds scale
    /// with the level, so a single clear cannot skip levels.
    pub fn maybe_level_up(&mut self) -> bool {
        if self.score >= self.level * LEVEL_THRESHOLD && self.level < MAX_LEVEL {
            self.level += 1;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    fn with(score: u32, level: u32) -> Self {
        Self { score, level }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}
