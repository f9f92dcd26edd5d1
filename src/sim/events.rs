//! Discrete notifications for audio and visual-effect sinks

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::{AsteroidSize, PowerUpKind};

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    GameStarted,
    Shoot { pos: Vec2 },
    /// Asteroid took damage but survived
    AsteroidHit { pos: Vec2, size: AsteroidSize },
    AsteroidDestroyed { pos: Vec2, size: AsteroidSize, points: u32 },
    PlayerHit { lives: u32 },
    PowerUpCollected { kind: PowerUpKind, pos: Vec2 },
    Bomb { pos: Vec2, destroyed: usize },
    /// Level quota met; `next_level` starts when the transition ends
    LevelTransitionStarted { next_level: u32 },
    LevelUp { level: u32 },
    Paused,
    Resumed,
    /// Final result, for the persistence collaborator
    GameOver { score: u64, level: u32 },
}
