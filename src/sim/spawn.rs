//! Asteroid spawn policy: timing, edge placement, size mix, power-up drops

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::geometry::{Bounds, direction_or_default};
use super::powerup::PowerUp;
use crate::tuning::{AsteroidSize, Tuning};

/// Cumulative roll thresholds per level tier: a roll below `threshold` picks `size`.
/// The last entry of each tier is the fallback.
const SIZE_MIX: [&[(f32, AsteroidSize)]; 4] = [
    // Level 1: mostly small, some medium
    &[(0.7, AsteroidSize::Small), (1.0, AsteroidSize::Medium)],
    // Level 2: adds large
    &[(0.4, AsteroidSize::Small), (0.8, AsteroidSize::Medium), (1.0, AsteroidSize::Large)],
    // Level 3: adds huge
    &[
        (0.2, AsteroidSize::Small),
        (0.5, AsteroidSize::Medium),
        (0.85, AsteroidSize::Large),
        (1.0, AsteroidSize::Huge),
    ],
    // Level 4+: skewed toward the big tiers
    &[
        (0.1, AsteroidSize::Small),
        (0.3, AsteroidSize::Medium),
        (0.7, AsteroidSize::Large),
        (1.0, AsteroidSize::Huge),
    ],
];

/// Map a uniform roll in [0, 1) to a size tier for `level`
pub fn size_for_roll(level: u32, roll: f32) -> AsteroidSize {
    let tier = SIZE_MIX[(level.max(1) as usize - 1).min(SIZE_MIX.len() - 1)];
    tier.iter()
        .find(|(threshold, _)| roll < *threshold)
        .or(tier.last())
        .map(|(_, size)| *size)
        .unwrap_or(AsteroidSize::Small)
}

/// Screen edge picked for a spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Decides when and where new asteroids appear
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnPolicy {
    bounds: Bounds,
    interval_ms: f32,
    min_interval_ms: f32,
    last_spawn_ms: f64,
}

impl SpawnPolicy {
    pub fn new(bounds: Bounds, tuning: &Tuning) -> Self {
        Self {
            bounds,
            interval_ms: tuning.levels.base_spawn_interval_ms,
            min_interval_ms: tuning.levels.min_spawn_interval_ms,
            last_spawn_ms: 0.0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Track a resized play surface
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn interval_ms(&self) -> f32 {
        self.interval_ms
    }

    /// Set the spawn interval, never below the configured floor
    pub fn set_interval(&mut self, interval_ms: f32) {
        self.interval_ms = interval_ms.max(self.min_interval_ms);
    }

    pub fn reset_timer(&mut self, now_ms: f64) {
        self.last_spawn_ms = now_ms;
    }

    /// True once per elapsed interval; restarts the timer when it fires
    pub fn should_spawn(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_spawn_ms >= self.interval_ms as f64 {
            self.last_spawn_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// A point just outside a random edge, at least `margin` from the player
    pub fn edge_position(&self, player: Option<Vec2>, margin: f32, offset: f32, rng: &mut impl Rng) -> Vec2 {
        let Bounds { width, height } = self.bounds;
        let edge = match rng.random_range(0..4) {
            0 => Edge::Top,
            1 => Edge::Right,
            2 => Edge::Bottom,
            _ => Edge::Left,
        };
        let along = rng.random::<f32>();
        let pos = match edge {
            Edge::Top => Vec2::new(along * width, -offset),
            Edge::Right => Vec2::new(width + offset, along * height),
            Edge::Bottom => Vec2::new(along * width, height + offset),
            Edge::Left => Vec2::new(-offset, along * height),
        };

        match player {
            Some(player) if pos.distance(player) < margin => {
                let dir = direction_or_default(player, pos);
                let mut reach = margin;
                let mut pushed = player + dir * reach;
                // f32 rounding can leave the pushed point a hair inside the margin
                while pushed.distance(player) < margin {
                    reach *= 1.0 + f32::EPSILON;
                    pushed = player + dir * reach;
                }
                pushed
            }
            _ => pos,
        }
    }

    pub fn size_for_level(level: u32, rng: &mut impl Rng) -> AsteroidSize {
        size_for_roll(level, rng.random::<f32>())
    }

    /// One asteroid at the edge, heading roughly for the screen center
    pub fn spawn_asteroid(&self, level: u32, player: Option<Vec2>, tuning: &Tuning, rng: &mut impl Rng) -> Asteroid {
        let pos = self.edge_position(player, tuning.spawn.player_margin, tuning.spawn.edge_offset, rng);
        let size = Self::size_for_level(level, rng);

        let to_center = self.bounds.center() - pos;
        let jitter = (rng.random::<f32>() - 0.5) * 2.0 * tuning.spawn.aim_jitter;
        let angle = (to_center.y.atan2(to_center.x) + jitter).rem_euclid(TAU);

        log::trace!("Spawning {size} asteroid at ({:.0}, {:.0})", pos.x, pos.y);
        Asteroid::new(pos, size, Some(angle), &tuning.asteroids, rng)
    }

    /// Opening wave for a level
    pub fn spawn_wave(
        &self,
        count: u32,
        level: u32,
        player: Option<Vec2>,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) -> Vec<Asteroid> {
        (0..count).map(|_| self.spawn_asteroid(level, player, tuning, rng)).collect()
    }

    /// Bernoulli drop roll for a destroyed asteroid
    pub fn maybe_drop_power_up(pos: Vec2, tuning: &Tuning, rng: &mut impl Rng) -> Option<PowerUp> {
        rng.random_bool(tuning.power_ups.drop_chance)
            .then(|| PowerUp::new(pos, None, &tuning.power_ups, rng))
    }
}
