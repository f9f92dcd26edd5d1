//! Asteroid Crasher - a 2D arcade asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, levels)
//! - `tuning`: Data-driven game balance
//! - `platform`: Frame timing and the browser binding
//! - `highscores`: Top-10 leaderboard fed from game-over results

pub mod highscores;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use platform::FrameClock;
pub use sim::{GameEvent, GamePhase, GameState, RenderState, TickInput, tick};
pub use tuning::{AsteroidSize, PowerUpKind, Tuning, TuningError};

/// Default play-surface size used when the host gives none
pub mod consts {
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;
}
