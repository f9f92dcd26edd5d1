//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bullet::Bullet;
use super::geometry::{Bounds, Circle};
use super::tick::TickInput;
use crate::tuning::{BulletTuning, PlayerTuning, PowerUpKind};

/// Result of applying a power-up to the ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpOutcome {
    /// Effect handled by the ship (shield, rapid fire)
    Applied(PowerUpKind),
    /// Screen-clearing bomb; the game state must detonate it
    Bomb,
}

/// Input magnitude above which the ship counts as thrusting
const THRUST_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Facing angle (radians)
    pub angle: f32,
    pub alive: bool,
    /// Game time of the last shot (ms)
    pub last_shot_ms: f64,
    /// Current minimum interval between shots (ms)
    pub fire_rate_ms: f32,
    pub invincible: bool,
    pub invincible_ms: f32,
    pub shielded: bool,
    pub shield_ms: f32,
    pub rapid_fire: bool,
    pub rapid_fire_ms: f32,
    /// Movement input was active this tick
    pub thrusting: bool,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &PlayerTuning) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: tuning.radius,
            angle: -std::f32::consts::FRAC_PI_2, // Facing up
            alive: true,
            last_shot_ms: 0.0,
            fire_rate_ms: tuning.fire_rate_ms,
            invincible: false,
            invincible_ms: 0.0,
            shielded: false,
            shield_ms: 0.0,
            rapid_fire: false,
            rapid_fire_ms: 0.0,
            thrusting: false,
        }
    }

    /// Put the ship back at `pos` with a fresh invincibility window
    pub fn respawn(&mut self, pos: Vec2, tuning: &PlayerTuning) {
        *self = Self::new(pos, tuning);
        self.invincible = true;
        self.invincible_ms = tuning.invincibility_ms;
    }

    /// Steer, integrate, clamp to bounds, aim, and count down timers
    pub fn advance(&mut self, dt_ms: f32, input: &TickInput, bounds: Bounds, tuning: &PlayerTuning) {
        let dt = dt_ms / 1000.0;
        let thrust = input.movement();

        self.vel += thrust * tuning.acceleration * dt;
        self.vel *= tuning.friction;
        self.pos += self.vel * dt;

        let r = self.radius;
        self.pos.x = self.pos.x.clamp(r, (bounds.width - r).max(r));
        self.pos.y = self.pos.y.clamp(r, (bounds.height - r).max(r));

        let to_aim = input.aim_target() - self.pos;
        self.angle = to_aim.y.atan2(to_aim.x);

        self.thrusting = thrust.x.abs() > THRUST_THRESHOLD || thrust.y.abs() > THRUST_THRESHOLD;

        if self.invincible {
            self.invincible_ms = (self.invincible_ms - dt_ms).max(0.0);
            if self.invincible_ms == 0.0 {
                self.invincible = false;
            }
        }
        if self.shielded {
            self.shield_ms = (self.shield_ms - dt_ms).max(0.0);
            if self.shield_ms == 0.0 {
                self.shielded = false;
            }
        }
        if self.rapid_fire {
            self.rapid_fire_ms = (self.rapid_fire_ms - dt_ms).max(0.0);
            if self.rapid_fire_ms == 0.0 {
                self.rapid_fire = false;
                self.fire_rate_ms = tuning.fire_rate_ms;
            }
        }
    }

    pub fn can_shoot(&self, now_ms: f64) -> bool {
        now_ms - self.last_shot_ms >= self.fire_rate_ms as f64
    }

    /// Fire from the ship's nose along the facing angle
    pub fn shoot(&mut self, now_ms: f64, tuning: &BulletTuning) -> Bullet {
        self.last_shot_ms = now_ms;
        let nose = self.pos + Vec2::from_angle(self.angle) * self.radius;
        Bullet::new(nose, self.angle, tuning)
    }

    /// Returns false (and changes nothing) while shielded or invincible
    pub fn take_damage(&mut self, tuning: &PlayerTuning) -> bool {
        if self.shielded || self.invincible {
            return false;
        }
        self.invincible = true;
        self.invincible_ms = tuning.invincibility_ms;
        true
    }

    pub fn apply_power_up(&mut self, kind: PowerUpKind, tuning: &PlayerTuning) -> PowerUpOutcome {
        match kind {
            PowerUpKind::Shield => {
                self.shielded = true;
                self.shield_ms = tuning.shield_duration_ms;
            }
            PowerUpKind::RapidFire => {
                self.rapid_fire = true;
                self.rapid_fire_ms = tuning.rapid_fire_duration_ms;
                self.fire_rate_ms = tuning.rapid_fire_rate_ms;
            }
            PowerUpKind::Bomb => return PowerUpOutcome::Bomb,
        }
        PowerUpOutcome::Applied(kind)
    }

    /// Point behind the ship where exhaust appears
    pub fn exhaust_point(&self) -> Vec2 {
        self.pos - Vec2::from_angle(self.angle) * self.radius * 0.4
    }
}

impl Circle for Player {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}
