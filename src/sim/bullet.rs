//! Player projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Circle};
use crate::tuning::BulletTuning;

/// A bullet flying along its firing angle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alive: bool,
    /// Past positions for rendering (newest first)
    pub trail: Vec<Vec2>,
    trail_length: usize,
}

impl Bullet {
    pub fn new(pos: Vec2, angle: f32, tuning: &BulletTuning) -> Self {
        Self {
            pos,
            vel: Vec2::from_angle(angle) * tuning.speed,
            radius: tuning.radius,
            alive: true,
            trail: Vec::with_capacity(tuning.trail_length + 1),
            trail_length: tuning.trail_length,
        }
    }

    /// Record the trail, move, and die once fully off-screen
    pub fn advance(&mut self, dt_ms: f32, bounds: Bounds) {
        self.trail.insert(0, self.pos);
        self.trail.truncate(self.trail_length);

        self.pos += self.vel * (dt_ms / 1000.0);

        if bounds.is_outside(self.pos, self.radius) {
            self.alive = false;
        }
    }
}

impl Circle for Bullet {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}
