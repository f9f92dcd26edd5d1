//! Cosmetic particles and the burst factories that create them

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::ParticleTuning;

/// Particle colors (0xRRGGBB)
pub mod palette {
    pub const ASTEROID: u32 = 0x8b4513;
    pub const PLAYER: u32 = 0x00ff88;
    pub const THRUSTER: u32 = 0xff6600;
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: u32,
    pub age_ms: f32,
    pub lifetime_ms: f32,
    /// Velocity multiplier per tick
    pub friction: f32,
    /// Downward acceleration (pixels/second²)
    pub gravity: f32,
}

impl Particle {
    pub fn advance(&mut self, dt_ms: f32) {
        let dt = dt_ms / 1000.0;
        self.age_ms += dt_ms.max(0.0);
        self.pos += self.vel * dt;
        self.vel *= self.friction;
        self.vel.y += self.gravity * dt;
    }

    pub fn is_dead(&self) -> bool {
        self.age_ms >= self.lifetime_ms
    }

    /// Remaining life in [0, 1]
    pub fn life(&self) -> f32 {
        (1.0 - self.age_ms / self.lifetime_ms).clamp(0.0, 1.0)
    }

    /// Radius shrinks with remaining life
    pub fn current_radius(&self) -> f32 {
        self.radius * self.life()
    }
}

fn burst_particle(
    pos: Vec2,
    angle: f32,
    speed: f32,
    radius: f32,
    color: u32,
    lifetime_ms: f32,
    tuning: &ParticleTuning,
) -> Particle {
    Particle {
        pos,
        vel: Vec2::from_angle(angle) * speed,
        radius,
        color,
        age_ms: 0.0,
        lifetime_ms,
        friction: tuning.friction,
        gravity: 0.0,
    }
}

/// Large burst for destroyed asteroids, player damage and pickups
pub fn explosion(pos: Vec2, color: u32, tuning: &ParticleTuning, rng: &mut impl Rng) -> Vec<Particle> {
    (0..tuning.explosion_count)
        .map(|_| {
            let lifetime = tuning.lifetime_min_ms
                + rng.random::<f32>() * (tuning.lifetime_max_ms - tuning.lifetime_min_ms);
            burst_particle(
                pos,
                rng.random::<f32>() * TAU,
                100.0 + rng.random::<f32>() * 200.0,
                2.0 + rng.random::<f32>() * 4.0,
                color,
                lifetime,
                tuning,
            )
        })
        .collect()
}

/// Small, short-lived burst for a non-lethal hit
pub fn hit_burst(pos: Vec2, color: u32, tuning: &ParticleTuning, rng: &mut impl Rng) -> Vec<Particle> {
    (0..tuning.hit_count)
        .map(|_| {
            burst_particle(
                pos,
                rng.random::<f32>() * TAU,
                50.0 + rng.random::<f32>() * 100.0,
                1.0 + rng.random::<f32>() * 2.0,
                color,
                tuning.hit_lifetime_ms,
                tuning,
            )
        })
        .collect()
}

/// Exhaust puff emitted opposite to the ship's facing
pub fn thruster(pos: Vec2, facing: f32, tuning: &ParticleTuning, rng: &mut impl Rng) -> Particle {
    burst_particle(
        pos,
        facing + PI + (rng.random::<f32>() - 0.5) * 0.5,
        50.0 + rng.random::<f32>() * 100.0,
        1.0 + rng.random::<f32>() * 3.0,
        palette::THRUSTER,
        tuning.thruster_lifetime_ms,
        tuning,
    )
}

/// Append particles, evicting the oldest beyond `max`
pub fn push_capped(particles: &mut Vec<Particle>, new: impl IntoIterator<Item = Particle>, max: usize) {
    particles.extend(new);
    if particles.len() > max {
        let excess = particles.len() - max;
        particles.drain(..excess);
    }
}
