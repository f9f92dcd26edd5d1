//! Per-tick snapshot handed to rendering, HUD and audio

use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::level::LevelInfo;
use super::state::{BombBlast, GamePhase, GameState, ScreenFeedback};

/// Remaining power-up time on the ship (ms), `None` when inactive
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerUpTimers {
    pub shield_ms: Option<f32>,
    pub rapid_fire_ms: Option<f32>,
    pub invincible_ms: Option<f32>,
}

/// What the outside world sees after a tick. Entity collections are read
/// straight from [`GameState`]; this carries the scalar state and events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub level: LevelInfo,
    pub power_ups: PowerUpTimers,
    pub bomb: Option<BombBlast>,
    pub feedback: ScreenFeedback,
    pub asteroid_count: usize,
    /// Events since the previous snapshot
    pub events: Vec<GameEvent>,
}

impl RenderState {
    /// Build a snapshot, draining pending events from the state
    pub fn capture(state: &mut GameState) -> Self {
        let power_ups = state
            .player
            .as_ref()
            .map(|p| PowerUpTimers {
                shield_ms: p.shielded.then_some(p.shield_ms),
                rapid_fire_ms: p.rapid_fire.then_some(p.rapid_fire_ms),
                invincible_ms: p.invincible.then_some(p.invincible_ms),
            })
            .unwrap_or_default();

        Self {
            phase: state.phase,
            score: state.score,
            lives: state.lives,
            level: state.level.info(),
            power_ups,
            bomb: state.bomb,
            feedback: state.feedback,
            asteroid_count: state.asteroids.len(),
            events: state.drain_events(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
