//! Level progression state machine
//!
//! `Active` counts destroyed asteroids until the level's quota is met; the
//! caller then starts a timed transition, after which the next level begins.

use serde::{Deserialize, Serialize};

use crate::tuning::LevelTuning;

/// Snapshot for HUD display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub level: u32,
    pub destroyed: u32,
    pub required: u32,
    pub progress: f32,
    pub transitioning: bool,
    pub transition_progress: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelProgression {
    level: u32,
    destroyed: u32,
    required: u32,
    transitioning: bool,
    transition_elapsed_ms: f32,
    tuning: LevelTuning,
}

impl LevelProgression {
    pub fn new(tuning: &LevelTuning) -> Self {
        Self {
            level: 1,
            destroyed: 0,
            required: required_for(tuning, 1),
            transitioning: false,
            transition_elapsed_ms: 0.0,
            tuning: *tuning,
        }
    }

    /// Back to level 1
    pub fn reset(&mut self) {
        *self = Self::new(&self.tuning);
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn destroyed(&self) -> u32 {
        self.destroyed
    }

    pub fn required(&self) -> u32 {
        self.required
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn remaining(&self) -> u32 {
        self.required.saturating_sub(self.destroyed)
    }

    /// Spawn interval for the current level
    pub fn spawn_interval_ms(&self) -> f32 {
        spawn_interval_for(&self.tuning, self.level)
    }

    /// Count one destruction. Returns true when the quota is reached; the
    /// caller is expected to start the transition. No-op while transitioning.
    pub fn add_destroyed(&mut self) -> bool {
        if self.transitioning {
            return false;
        }
        self.destroyed = self.destroyed.saturating_add(1);
        self.destroyed >= self.required
    }

    pub fn start_transition(&mut self) {
        log::debug!("Level {} complete, transitioning", self.level);
        self.transitioning = true;
        self.transition_elapsed_ms = 0.0;
    }

    /// Advance the transition timer. Returns true exactly once, on the tick
    /// the next level begins.
    pub fn update_transition(&mut self, dt_ms: f32) -> bool {
        if !self.transitioning {
            return false;
        }
        self.transition_elapsed_ms += dt_ms.max(0.0);
        if self.transition_elapsed_ms < self.tuning.transition_ms {
            return false;
        }

        self.transitioning = false;
        self.level += 1;
        self.destroyed = 0;
        self.required = required_for(&self.tuning, self.level);
        true
    }

    /// Fraction of the quota met, in [0, 1]
    pub fn progress(&self) -> f32 {
        (self.destroyed as f32 / self.required.max(1) as f32).min(1.0)
    }

    /// Fraction of the transition elapsed, 0 when not transitioning
    pub fn transition_progress(&self) -> f32 {
        if self.transitioning {
            (self.transition_elapsed_ms / self.tuning.transition_ms).min(1.0)
        } else {
            0.0
        }
    }

    /// Scales with level: 1.0 at level 1, +0.2 per level
    pub fn difficulty_multiplier(&self) -> f32 {
        1.0 + (self.level - 1) as f32 * 0.2
    }

    pub fn info(&self) -> LevelInfo {
        LevelInfo {
            level: self.level,
            destroyed: self.destroyed,
            required: self.required,
            progress: self.progress(),
            transitioning: self.transitioning,
            transition_progress: self.transition_progress(),
        }
    }
}

/// Asteroids to destroy on `level`
pub fn required_for(tuning: &LevelTuning, level: u32) -> u32 {
    tuning.base_required + level.saturating_sub(1) * tuning.required_increase
}

/// Spawn interval on `level`, clamped to the floor
pub fn spawn_interval_for(tuning: &LevelTuning, level: u32) -> f32 {
    let decrease = level.saturating_sub(1) as f32 * tuning.spawn_decrease_per_level_ms;
    (tuning.base_spawn_interval_ms - decrease).max(tuning.min_spawn_interval_ms)
}
