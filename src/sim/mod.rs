//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied frame deltas only (capped by tuning)
//! - Seeded RNG only
//! - Stable iteration order (insertion order of each collection)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod autopilot;
pub mod bullet;
pub mod collision;
pub mod events;
pub mod geometry;
pub mod level;
pub mod particle;
pub mod player;
pub mod powerup;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use asteroid::Asteroid;
pub use bullet::Bullet;
pub use collision::{BulletHit, bullet_asteroid_hits, player_asteroid_hits, player_power_up_pickups};
pub use events::GameEvent;
pub use geometry::{Bounds, Circle, circles_intersect, collision_normal, intersects, point_in_circle};
pub use level::{LevelInfo, LevelProgression};
pub use particle::Particle;
pub use player::{Player, PowerUpOutcome};
pub use powerup::PowerUp;
pub use snapshot::{PowerUpTimers, RenderState};
pub use spawn::SpawnPolicy;
pub use state::{BombBlast, Flash, GamePhase, GameState, ScreenFeedback};
pub use tick::{TickInput, tick};
