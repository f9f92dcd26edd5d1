//! Per-tick pairwise collision passes
//!
//! Stateless: every function scans the current collections and returns hit
//! lists as indices into them. Indices stay valid until the caller removes
//! entries, so consequences must be applied before purging.

use super::asteroid::Asteroid;
use super::bullet::Bullet;
use super::geometry::intersects;
use super::player::Player;
use super::powerup::PowerUp;

/// A bullet that struck an asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletHit {
    pub bullet: usize,
    pub asteroid: usize,
}

/// Match live bullets against live asteroids.
///
/// Bullets are scanned newest first and asteroids newest first; each bullet
/// records at most one hit and is marked dead on that hit.
pub fn bullet_asteroid_hits(bullets: &mut [Bullet], asteroids: &[Asteroid]) -> Vec<BulletHit> {
    let mut hits = Vec::new();

    for (bi, bullet) in bullets.iter_mut().enumerate().rev() {
        if !bullet.alive {
            continue;
        }
        let struck = asteroids
            .iter()
            .enumerate()
            .rev()
            .find(|(_, asteroid)| asteroid.alive && intersects(&*bullet, *asteroid))
            .map(|(ai, _)| ai);

        if let Some(asteroid) = struck {
            bullet.alive = false;
            hits.push(BulletHit { bullet: bi, asteroid });
        }
    }

    hits
}

/// Every live asteroid overlapping the ship. Empty if there is no live ship.
pub fn player_asteroid_hits(player: Option<&Player>, asteroids: &[Asteroid]) -> Vec<usize> {
    let Some(player) = player.filter(|p| p.alive) else {
        return Vec::new();
    };

    asteroids
        .iter()
        .enumerate()
        .filter(|(_, asteroid)| asteroid.alive && intersects(player, *asteroid))
        .map(|(i, _)| i)
        .collect()
}

/// Every live power-up the ship touches; each is marked collected (dead)
pub fn player_power_up_pickups(player: Option<&Player>, power_ups: &mut [PowerUp]) -> Vec<usize> {
    let Some(player) = player.filter(|p| p.alive) else {
        return Vec::new();
    };

    let mut collected = Vec::new();
    for (i, power_up) in power_ups.iter_mut().enumerate().rev() {
        if power_up.alive && intersects(player, &*power_up) {
            power_up.alive = false;
            collected.push(i);
        }
    }
    collected
}
