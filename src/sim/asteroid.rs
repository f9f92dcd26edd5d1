//! Asteroids: size tiers, procedural outlines, damage and splitting

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Circle};
use crate::tuning::{AsteroidSize, AsteroidTuning, SplitSpec};

/// Outline vertex count is `MIN_VERTICES + [0, EXTRA_VERTICES]`
const MIN_VERTICES: usize = 8;
const EXTRA_VERTICES: usize = 3;
/// Per-vertex radius as a fraction of nominal
const MIN_VERTEX_SCALE: f32 = 0.7;

/// A rock drifting across the play area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub size: AsteroidSize,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub health: u32,
    pub max_health: u32,
    pub points: u32,
    split: Option<SplitSpec>,
    /// Polygon relative to `pos`, fixed at creation
    outline: Vec<Vec2>,
    pub rotation: f32,
    /// Spin rate (radians/second)
    pub spin: f32,
    /// Cosmetic countdown after a non-lethal hit (ms)
    pub hit_flash_ms: f32,
    pub alive: bool,
}

impl Asteroid {
    /// Build an asteroid of the given tier. `angle` fixes the travel
    /// direction; otherwise it is random.
    pub fn new(
        pos: Vec2,
        size: AsteroidSize,
        angle: Option<f32>,
        tuning: &AsteroidTuning,
        rng: &mut impl Rng,
    ) -> Self {
        let spec = tuning.spec(size);
        debug_assert!(spec.speed_min <= spec.speed_max, "{size}: empty speed range");

        let speed = spec.speed_min + rng.random::<f32>() * (spec.speed_max - spec.speed_min);
        let heading = angle.unwrap_or_else(|| rng.random::<f32>() * TAU);

        Self {
            size,
            pos,
            vel: Vec2::from_angle(heading) * speed,
            radius: spec.radius,
            health: spec.health,
            max_health: spec.health,
            points: spec.points,
            split: spec.split,
            outline: generate_outline(spec.radius, rng),
            rotation: rng.random::<f32>() * TAU,
            spin: (rng.random::<f32>() - 0.5) * 2.0,
            hit_flash_ms: 0.0,
            alive: true,
        }
    }

    pub fn outline(&self) -> &[Vec2] {
        &self.outline
    }

    pub fn split_spec(&self) -> Option<SplitSpec> {
        self.split
    }

    /// Integrate, spin, wrap each axis independently, decay hit-flash
    pub fn advance(&mut self, dt_ms: f32, bounds: Bounds) {
        let dt = dt_ms / 1000.0;
        self.pos += self.vel * dt;
        self.rotation += self.spin * dt;

        let r = self.radius;
        if self.pos.x < -r {
            self.pos.x = bounds.width + r;
        } else if self.pos.x > bounds.width + r {
            self.pos.x = -r;
        }
        if self.pos.y < -r {
            self.pos.y = bounds.height + r;
        } else if self.pos.y > bounds.height + r {
            self.pos.y = -r;
        }

        self.hit_flash_ms = (self.hit_flash_ms - dt_ms).max(0.0);
    }

    /// Apply one point of damage. Returns true if this destroyed the asteroid.
    pub fn hit(&mut self, tuning: &AsteroidTuning) -> bool {
        self.health = self.health.saturating_sub(1);
        self.hit_flash_ms = tuning.hit_flash_ms;
        if self.health == 0 {
            self.alive = false;
        }
        self.health == 0
    }

    /// Children produced on destruction: evenly spread around a full circle
    /// with a little jitter and an outward boost. Empty for the smallest tier.
    pub fn split(&self, tuning: &AsteroidTuning, rng: &mut impl Rng) -> Vec<Asteroid> {
        let Some(SplitSpec { into, count }) = self.split else {
            return Vec::new();
        };

        (0..count)
            .map(|i| {
                let spread = i as f32 / count as f32 * TAU + rng.random::<f32>() * 0.5;
                let mut child = Asteroid::new(self.pos, into, Some(spread), tuning, rng);
                child.vel += Vec2::from_angle(spread) * tuning.split_boost;
                child
            })
            .collect()
    }

    /// Health fraction for health bars
    pub fn health_ratio(&self) -> f32 {
        self.health as f32 / self.max_health.max(1) as f32
    }
}

impl Circle for Asteroid {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}

fn generate_outline(radius: f32, rng: &mut impl Rng) -> Vec<Vec2> {
    let count = MIN_VERTICES + rng.random_range(0..=EXTRA_VERTICES);
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            let scale = MIN_VERTEX_SCALE + rng.random::<f32>() * (1.0 - MIN_VERTEX_SCALE);
            Vec2::from_angle(angle) * radius * scale
        })
        .collect()
}
