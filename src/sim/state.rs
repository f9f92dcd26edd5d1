//! Game state owned by the orchestrator
//!
//! Every entity collection, the level machine and the spawn policy live here.
//! Nothing else mutates them; `tick` is the only writer during play.

use std::sync::Arc;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::bullet::Bullet;
use super::events::GameEvent;
use super::geometry::Bounds;
use super::level::LevelProgression;
use super::particle::Particle;
use super::player::Player;
use super::powerup::PowerUp;
use super::spawn::SpawnPolicy;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, no ship
    Menu,
    /// Active gameplay
    Playing,
    /// Simulation frozen
    Paused,
    /// Run ended
    GameOver,
}

/// Screen flash colors (0xRRGGBB)
pub const FLASH_DAMAGE: u32 = 0xff0000;
pub const FLASH_BOMB: u32 = 0xff8800;

/// A colored full-screen flash
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    pub color: u32,
    pub remaining_ms: f32,
    pub duration_ms: f32,
}

impl Flash {
    /// Opacity fades from 0.5 to 0 over the flash
    pub fn alpha(&self) -> f32 {
        (self.remaining_ms / self.duration_ms).clamp(0.0, 1.0) * 0.5
    }
}

/// Screen shake and flash requested by gameplay, consumed by the renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenFeedback {
    pub shake_intensity: f32,
    pub shake_remaining_ms: f32,
    pub flash: Option<Flash>,
}

impl ScreenFeedback {
    pub fn shake(&mut self, intensity: f32, duration_ms: f32) {
        self.shake_intensity = intensity;
        self.shake_remaining_ms = duration_ms;
    }

    pub fn flash(&mut self, color: u32, duration_ms: f32) {
        self.flash = Some(Flash {
            color,
            remaining_ms: duration_ms,
            duration_ms,
        });
    }

    pub fn update(&mut self, dt_ms: f32) {
        if self.shake_remaining_ms > 0.0 {
            self.shake_remaining_ms = (self.shake_remaining_ms - dt_ms).max(0.0);
            if self.shake_remaining_ms == 0.0 {
                self.shake_intensity = 0.0;
            }
        }
        if let Some(flash) = &mut self.flash {
            flash.remaining_ms -= dt_ms;
            if flash.remaining_ms <= 0.0 {
                self.flash = None;
            }
        }
    }
}

/// Expanding ring of a detonated bomb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BombBlast {
    pub origin: Vec2,
    /// 0 at detonation, 1 when the effect ends
    pub progress: f32,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Arc<Tuning>,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub bounds: Bounds,
    pub score: u64,
    pub lives: u32,
    /// Simulated play time (ms); paused time does not count
    pub time_ms: f64,
    /// Absent on the menu
    pub player: Option<Player>,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    pub power_ups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub bomb: Option<BombBlast>,
    pub feedback: ScreenFeedback,
    pub level: LevelProgression,
    pub spawner: SpawnPolicy,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// A session on the menu; call [`GameState::start_game`] to play
    pub fn new(tuning: Arc<Tuning>, bounds: Bounds, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            bounds,
            score: 0,
            lives: tuning.game.starting_lives,
            time_ms: 0.0,
            player: None,
            bullets: Vec::new(),
            asteroids: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            bomb: None,
            feedback: ScreenFeedback::default(),
            level: LevelProgression::new(&tuning.levels),
            spawner: SpawnPolicy::new(bounds, &tuning),
            events: Vec::new(),
            tuning,
        }
    }

    /// Reset everything and begin a run at level 1
    pub fn start_game(&mut self) {
        let tuning = Arc::clone(&self.tuning);

        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = tuning.game.starting_lives;
        self.time_ms = 0.0;
        self.level.reset();

        let player = Player::new(self.bounds.center(), &tuning.player);
        let player_pos = player.pos;
        self.player = Some(player);

        self.bullets.clear();
        self.asteroids.clear();
        self.power_ups.clear();
        self.particles.clear();
        self.bomb = None;
        self.feedback = ScreenFeedback::default();

        self.spawner.set_interval(self.level.spawn_interval_ms());
        self.spawner.reset_timer(0.0);
        let wave = self.spawner.spawn_wave(
            tuning.levels.initial_wave,
            self.level.level(),
            Some(player_pos),
            &tuning,
            &mut self.rng,
        );
        self.asteroids.extend(wave);

        log::info!("Game started (seed {})", self.seed);
        self.events.push(GameEvent::GameStarted);
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            self.events.push(GameEvent::Paused);
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            self.events.push(GameEvent::Resumed);
        }
    }

    pub(crate) fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        if let Some(player) = &mut self.player {
            player.alive = false;
        }
        log::info!("Game over: score {} on level {}", self.score, self.level.level());
        self.events.push(GameEvent::GameOver {
            score: self.score,
            level: self.level.level(),
        });
    }

    /// Follow a resized play surface
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.spawner.resize(bounds);
    }

    pub fn player_pos(&self) -> Option<Vec2> {
        self.player.as_ref().map(|p| p.pos)
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
