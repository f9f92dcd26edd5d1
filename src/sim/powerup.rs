//! Collectible power-ups

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Circle;
use crate::tuning::{PowerUpKind, PowerUpTuning};

impl PowerUpKind {
    /// Uniform draw over every kind
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A pickup waiting to be collected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    /// Anchor position used for collision
    pub pos: Vec2,
    pub radius: f32,
    /// Cosmetic vertical bob, not part of the collision position
    pub float_offset: f32,
    pub rotation: f32,
    pub age_ms: f32,
    pub lifetime_ms: f32,
    pub alive: bool,
    float_speed: f32,
    float_amplitude: f32,
}

impl PowerUp {
    /// Create a pickup; `kind` is drawn uniformly when not given
    pub fn new(pos: Vec2, kind: Option<PowerUpKind>, tuning: &PowerUpTuning, rng: &mut impl Rng) -> Self {
        Self {
            kind: kind.unwrap_or_else(|| PowerUpKind::random(rng)),
            pos,
            radius: tuning.radius,
            float_offset: 0.0,
            rotation: 0.0,
            age_ms: 0.0,
            lifetime_ms: tuning.lifetime_ms,
            alive: true,
            float_speed: tuning.float_speed,
            float_amplitude: tuning.float_amplitude,
        }
    }

    pub fn advance(&mut self, dt_ms: f32) {
        self.age_ms += dt_ms.max(0.0);
        self.float_offset = (self.age_ms / 1000.0 * self.float_speed).sin() * self.float_amplitude;
        self.rotation += dt_ms / 1000.0 * 2.0;

        if self.age_ms >= self.lifetime_ms {
            self.alive = false;
        }
    }

    /// Where to draw the pickup (anchor plus bob)
    pub fn render_pos(&self) -> Vec2 {
        self.pos + Vec2::new(0.0, self.float_offset)
    }

    /// Remaining lifetime in ms, for fade/flash rendering
    pub fn remaining_ms(&self) -> f32 {
        (self.lifetime_ms - self.age_ms).max(0.0)
    }
}

impl Circle for PowerUp {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}
