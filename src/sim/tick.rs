//! Per-frame simulation tick
//!
//! The caller owns scheduling: pass the raw frame delta and get back a
//! snapshot. Deltas are capped so a stalled tab does not teleport entities.

use std::sync::Arc;

use glam::Vec2;

use super::autopilot;
use super::collision;
use super::events::GameEvent;
use super::particle::{self, Particle, palette};
use super::player::PowerUpOutcome;
use super::snapshot::RenderState;
use super::spawn::SpawnPolicy;
use super::state::{BombBlast, FLASH_BOMB, FLASH_DAMAGE, GamePhase, GameState};
use crate::tuning::Tuning;

/// Input sampled once per tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Virtual joystick, each axis in [-1, 1]
    pub joystick: Option<Vec2>,
    /// Mouse position in play-area coordinates
    pub pointer: Vec2,
    /// Aim point while a touch fire control is held; overrides `pointer`
    pub touch_aim: Option<Vec2>,
    /// Fire held
    pub fire: bool,
    /// Start a run from the menu or game-over screen
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
    /// Demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

impl TickInput {
    /// Digital directions plus joystick, clamped per axis to [-1, 1]
    pub fn movement(&self) -> Vec2 {
        let mut m = Vec2::ZERO;
        if self.up {
            m.y -= 1.0;
        }
        if self.down {
            m.y += 1.0;
        }
        if self.left {
            m.x -= 1.0;
        }
        if self.right {
            m.x += 1.0;
        }
        if let Some(stick) = self.joystick {
            m += stick;
        }
        m.clamp(Vec2::NEG_ONE, Vec2::ONE)
    }

    pub fn aim_target(&self) -> Vec2 {
        self.touch_aim.unwrap_or(self.pointer)
    }
}

/// Advance the game by one frame and report the resulting state
pub fn tick(state: &mut GameState, input: &TickInput, raw_dt_ms: f32) -> RenderState {
    let dt = if raw_dt_ms.is_finite() {
        raw_dt_ms.clamp(0.0, state.tuning.game.max_frame_ms)
    } else {
        0.0
    };

    // Idle/demo mode - the autopilot plays the game
    let input = if input.idle_mode {
        autopilot::drive(state, input)
    } else {
        input.clone()
    };
    let input = &input;

    if input.start && matches!(state.phase, GamePhase::Menu | GamePhase::GameOver) {
        state.start_game();
    }

    if input.pause {
        match state.phase {
            GamePhase::Playing => state.pause(),
            GamePhase::Paused => state.resume(),
            _ => {}
        }
    }

    if state.phase == GamePhase::Playing {
        step(state, input, dt);
    }

    RenderState::capture(state)
}

/// One simulation step while playing
fn step(state: &mut GameState, input: &TickInput, dt: f32) {
    let tuning = Arc::clone(&state.tuning);
    state.time_ms += dt as f64;
    state.feedback.update(dt);

    // Ship movement and firing
    let bounds = state.bounds;
    let now = state.time_ms;
    if let Some(player) = state.player.as_mut().filter(|p| p.alive) {
        player.advance(dt, input, bounds, &tuning.player);

        if player.thrusting {
            let puff = particle::thruster(player.exhaust_point(), player.angle, &tuning.particles, &mut state.rng);
            particle::push_capped(&mut state.particles, [puff], tuning.particles.max_particles);
        }

        if input.fire && player.can_shoot(now) {
            let bullet = player.shoot(now, &tuning.bullet);
            state.events.push(GameEvent::Shoot { pos: bullet.pos });
            state.bullets.push(bullet);
        }
    }

    for bullet in &mut state.bullets {
        bullet.advance(dt, bounds);
    }
    state.bullets.retain(|b| b.alive);

    for asteroid in &mut state.asteroids {
        asteroid.advance(dt, bounds);
    }

    for power_up in &mut state.power_ups {
        power_up.advance(dt);
    }
    state.power_ups.retain(|p| p.alive);

    for p in &mut state.particles {
        p.advance(dt);
    }
    state.particles.retain(|p| !p.is_dead());

    if let Some(bomb) = &mut state.bomb {
        bomb.progress += dt / tuning.game.bomb_duration_ms;
        if bomb.progress >= 1.0 {
            state.bomb = None;
        }
    }

    resolve_bullet_hits(state, &tuning);

    if resolve_player_hits(state, &tuning) {
        return;
    }

    resolve_pickups(state, &tuning);

    if !state.level.is_transitioning() {
        // Failsafe: never leave the field empty
        if state.spawner.should_spawn(now) || state.asteroids.is_empty() {
            let asteroid = state
                .spawner
                .spawn_asteroid(state.level.level(), state.player_pos(), &tuning, &mut state.rng);
            state.asteroids.push(asteroid);
        }
    } else if state.level.update_transition(dt) {
        start_next_level(state, &tuning);
    }
}

fn emit(state: &mut GameState, particles: Vec<Particle>, tuning: &Tuning) {
    particle::push_capped(&mut state.particles, particles, tuning.particles.max_particles);
}

fn begin_level_transition(state: &mut GameState) {
    state.level.start_transition();
    state.events.push(GameEvent::LevelTransitionStarted {
        next_level: state.level.level() + 1,
    });
}

/// Count a destruction toward the level quota
fn record_destruction(state: &mut GameState) {
    if state.level.add_destroyed() {
        begin_level_transition(state);
    }
}

fn resolve_bullet_hits(state: &mut GameState, tuning: &Tuning) {
    let hits = collision::bullet_asteroid_hits(&mut state.bullets, &state.asteroids);

    for hit in hits {
        let asteroid = &mut state.asteroids[hit.asteroid];
        // Several bullets can land on the same rock in one pass
        if !asteroid.alive {
            continue;
        }
        let destroyed = asteroid.hit(&tuning.asteroids);
        let (pos, size, points) = (asteroid.pos, asteroid.size, asteroid.points);

        if destroyed {
            let children = asteroid.split(&tuning.asteroids, &mut state.rng);
            state.score += points as u64;
            state.asteroids.extend(children);

            let burst = particle::explosion(pos, palette::ASTEROID, &tuning.particles, &mut state.rng);
            emit(state, burst, tuning);
            state.feedback.shake(5.0, 100.0);
            state.events.push(GameEvent::AsteroidDestroyed { pos, size, points });

            if let Some(power_up) = SpawnPolicy::maybe_drop_power_up(pos, tuning, &mut state.rng) {
                log::debug!("Dropped {} power-up", power_up.kind);
                state.power_ups.push(power_up);
            }

            record_destruction(state);
        } else {
            let sparks = particle::hit_burst(pos, palette::ASTEROID, &tuning.particles, &mut state.rng);
            emit(state, sparks, tuning);
            state.events.push(GameEvent::AsteroidHit { pos, size });
        }
    }

    state.bullets.retain(|b| b.alive);
    state.asteroids.retain(|a| a.alive);
}

/// Returns true if the run ended
fn resolve_player_hits(state: &mut GameState, tuning: &Tuning) -> bool {
    if collision::player_asteroid_hits(state.player.as_ref(), &state.asteroids).is_empty() {
        return false;
    }
    let Some(player) = state.player.as_mut() else {
        return false;
    };
    if !player.take_damage(&tuning.player) {
        return false;
    }
    let pos = player.pos;

    state.lives = state.lives.saturating_sub(1);
    let burst = particle::explosion(pos, palette::PLAYER, &tuning.particles, &mut state.rng);
    emit(state, burst, tuning);
    state.feedback.shake(15.0, 300.0);
    state.feedback.flash(FLASH_DAMAGE, 200.0);
    state.events.push(GameEvent::PlayerHit { lives: state.lives });
    log::debug!("Player hit, {} lives left", state.lives);

    if state.lives == 0 {
        state.game_over();
        return true;
    }
    false
}

fn resolve_pickups(state: &mut GameState, tuning: &Tuning) {
    let collected = collision::player_power_up_pickups(state.player.as_ref(), &mut state.power_ups);

    for i in collected {
        let (kind, pos) = (state.power_ups[i].kind, state.power_ups[i].pos);
        let Some(player) = state.player.as_mut() else {
            break;
        };
        let outcome = player.apply_power_up(kind, &tuning.player);

        let burst = particle::explosion(pos, kind.color(), &tuning.particles, &mut state.rng);
        emit(state, burst, tuning);
        state.events.push(GameEvent::PowerUpCollected { kind, pos });
        log::debug!("Collected {kind}");

        if outcome == PowerUpOutcome::Bomb {
            detonate_bomb(state, tuning);
        }
    }

    state.power_ups.retain(|p| p.alive);
}

/// Destroy every live asteroid, crediting points and level progress
fn detonate_bomb(state: &mut GameState, tuning: &Tuning) {
    let origin = state.player_pos().unwrap_or_else(|| state.bounds.center());
    state.bomb = Some(BombBlast { origin, progress: 0.0 });
    state.feedback.shake(20.0, 500.0);
    state.feedback.flash(FLASH_BOMB, 300.0);

    let asteroids = std::mem::take(&mut state.asteroids);
    let mut destroyed = 0;
    for asteroid in asteroids.iter().filter(|a| a.alive) {
        state.score += asteroid.points as u64;
        let burst = particle::explosion(asteroid.pos, palette::ASTEROID, &tuning.particles, &mut state.rng);
        emit(state, burst, tuning);
        record_destruction(state);
        destroyed += 1;
    }

    log::debug!("Bomb destroyed {destroyed} asteroids");
    state.events.push(GameEvent::Bomb { pos: origin, destroyed });
}

/// Clear the field and open the next level with a fresh wave
fn start_next_level(state: &mut GameState, tuning: &Tuning) {
    let level = state.level.level();
    state.asteroids.clear();
    state.power_ups.clear();
    state.bullets.clear();

    let wave = state.spawner.spawn_wave(
        tuning.levels.initial_wave + level,
        level,
        state.player_pos(),
        tuning,
        &mut state.rng,
    );
    state.asteroids.extend(wave);

    state.spawner.set_interval(state.level.spawn_interval_ms());
    state.spawner.reset_timer(state.time_ms);

    log::info!("Level {level} (spawn every {}ms)", state.spawner.interval_ms());
    state.events.push(GameEvent::LevelUp { level });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::asteroid::Asteroid;
    use crate::sim::bullet::Bullet;
    use crate::sim::geometry::Bounds;
    use crate::sim::powerup::PowerUp;
    use crate::tuning::{AsteroidSize, PowerUpKind};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn new_game() -> GameState {
        let mut state = GameState::new(Arc::new(Tuning::default()), Bounds::new(800.0, 600.0), 12345);
        state.start_game();
        state.drain_events();
        state
    }

    fn still_rock(pos: Vec2, size: AsteroidSize) -> Asteroid {
        let mut rng = Pcg32::seed_from_u64(77);
        let mut a = Asteroid::new(pos, size, Some(0.0), &Tuning::default().asteroids, &mut rng);
        a.vel = Vec2::ZERO;
        a
    }

    fn bullet_on(pos: Vec2) -> Bullet {
        Bullet::new(pos, 0.0, &Tuning::default().bullet)
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn test_menu_does_not_simulate() {
        let mut state = GameState::new(Arc::new(Tuning::default()), Bounds::new(800.0, 600.0), 1);
        let snap = tick(&mut state, &idle(), 16.0);
        assert_eq!(snap.phase, GamePhase::Menu);
        assert_eq!(state.time_ms, 0.0);

        let start = TickInput {
            start: true,
            ..Default::default()
        };
        let snap = tick(&mut state, &start, 16.0);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert!(snap.events.contains(&GameEvent::GameStarted));
        assert!(state.player.is_some());
    }

    #[test]
    fn test_delta_time_is_capped() {
        let mut state = new_game();
        tick(&mut state, &idle(), 1000.0);
        assert_eq!(state.time_ms, 50.0);
        tick(&mut state, &idle(), -20.0);
        assert_eq!(state.time_ms, 50.0);
        tick(&mut state, &idle(), f32::NAN);
        assert_eq!(state.time_ms, 50.0);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut state = new_game();
        let toggle = TickInput {
            pause: true,
            ..Default::default()
        };
        let snap = tick(&mut state, &toggle, 16.0);
        assert_eq!(snap.phase, GamePhase::Paused);
        let positions: Vec<Vec2> = state.asteroids.iter().map(|a| a.pos).collect();

        tick(&mut state, &idle(), 16.0);
        let after: Vec<Vec2> = state.asteroids.iter().map(|a| a.pos).collect();
        assert_eq!(positions, after);
        assert_eq!(state.time_ms, 0.0);

        let snap = tick(&mut state, &toggle, 16.0);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert!(snap.events.contains(&GameEvent::Resumed));
    }

    #[test]
    fn test_destroying_three_small_asteroids() {
        let mut state = new_game();
        let spots = [Vec2::new(100.0, 100.0), Vec2::new(700.0, 100.0), Vec2::new(100.0, 500.0)];
        state.asteroids = spots.iter().map(|&p| still_rock(p, AsteroidSize::Small)).collect();
        state.bullets = spots.iter().map(|&p| bullet_on(p)).collect();

        let snap = tick(&mut state, &idle(), 1.0);

        assert_eq!(snap.score, 300);
        assert_eq!(state.level.destroyed(), 3);
        assert_eq!(state.level.required(), 25);
        assert_eq!(state.level.remaining(), 22);
        assert!(state.bullets.is_empty());
        let destroyed = snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::AsteroidDestroyed { .. }))
            .count();
        assert_eq!(destroyed, 3);
        // Small rocks leave nothing behind; the failsafe spawns a fresh one
        assert_eq!(state.asteroids.len(), 1);
        assert!(state.asteroids[0].pos.distance(Vec2::new(400.0, 300.0)) >= 100.0);
    }

    #[test]
    fn test_medium_asteroid_survives_one_hit_then_splits() {
        let mut state = new_game();
        state.asteroids = vec![still_rock(Vec2::new(100.0, 100.0), AsteroidSize::Medium)];
        state.bullets = vec![bullet_on(Vec2::new(100.0, 100.0)), bullet_on(Vec2::new(100.0, 100.0))];

        let snap = tick(&mut state, &idle(), 1.0);

        assert_eq!(snap.score, 200);
        assert_eq!(state.asteroids.len(), 2);
        assert!(state.asteroids.iter().all(|a| a.size == AsteroidSize::Small));
        assert!(snap.events.iter().any(|e| matches!(e, GameEvent::AsteroidHit { .. })));
        assert!(snap.events.iter().any(|e| matches!(e, GameEvent::AsteroidDestroyed { .. })));
        assert_eq!(state.level.destroyed(), 1);
    }

    #[test]
    fn test_dead_asteroid_is_not_credited_twice() {
        let mut state = new_game();
        state.asteroids = vec![still_rock(Vec2::new(100.0, 100.0), AsteroidSize::Small)];
        state.bullets = vec![bullet_on(Vec2::new(100.0, 100.0)), bullet_on(Vec2::new(101.0, 100.0))];

        let snap = tick(&mut state, &idle(), 1.0);
        assert_eq!(snap.score, 100);
        assert_eq!(state.level.destroyed(), 1);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_collision_costs_one_life_then_grants_invincibility() {
        let mut state = new_game();
        let center = state.player_pos().unwrap();
        state.asteroids = vec![still_rock(center, AsteroidSize::Large)];

        let snap = tick(&mut state, &idle(), 1.0);
        assert_eq!(snap.lives, 2);
        assert!(snap.power_ups.invincible_ms.is_some());
        assert!(snap.feedback.flash.is_some());

        let snap = tick(&mut state, &idle(), 1.0);
        assert_eq!(snap.lives, 2);
        assert_eq!(state.asteroids.len(), 1);
    }

    #[test]
    fn test_shield_blocks_collision_damage() {
        let mut state = new_game();
        let tuning = Arc::clone(&state.tuning);
        let center = state.player_pos().unwrap();
        state
            .player
            .as_mut()
            .unwrap()
            .apply_power_up(PowerUpKind::Shield, &tuning.player);
        state.asteroids = vec![still_rock(center, AsteroidSize::Large)];

        let snap = tick(&mut state, &idle(), 1.0);
        assert_eq!(snap.lives, 3);
        assert!(snap.power_ups.shield_ms.is_some());
        assert!(!state.player.as_ref().unwrap().invincible);
    }

    #[test]
    fn test_last_life_ends_the_game() {
        let mut state = new_game();
        state.lives = 1;
        state.score = 4200;
        let center = state.player_pos().unwrap();
        state.asteroids = vec![still_rock(center, AsteroidSize::Small)];

        let snap = tick(&mut state, &idle(), 1.0);
        assert!(snap.is_game_over());
        assert_eq!(snap.lives, 0);
        assert!(snap.events.contains(&GameEvent::GameOver { score: 4200, level: 1 }));

        let time = state.time_ms;
        tick(&mut state, &idle(), 16.0);
        assert_eq!(state.time_ms, time);
    }

    #[test]
    fn test_shield_pickup() {
        let mut state = new_game();
        let tuning = Arc::clone(&state.tuning);
        let center = state.player_pos().unwrap();
        state.power_ups = vec![PowerUp::new(
            center,
            Some(PowerUpKind::Shield),
            &tuning.power_ups,
            &mut Pcg32::seed_from_u64(1),
        )];

        let snap = tick(&mut state, &idle(), 1.0);
        assert!(state.power_ups.is_empty());
        assert!(state.player.as_ref().unwrap().shielded);
        assert!(
            snap.events
                .iter()
                .any(|e| matches!(e, GameEvent::PowerUpCollected { kind: PowerUpKind::Shield, .. }))
        );
    }

    #[test]
    fn test_bomb_clears_field_and_scores() {
        let mut state = new_game();
        let tuning = Arc::clone(&state.tuning);
        let center = state.player_pos().unwrap();
        state.asteroids = vec![
            still_rock(Vec2::new(100.0, 100.0), AsteroidSize::Small),
            still_rock(Vec2::new(700.0, 100.0), AsteroidSize::Medium),
            still_rock(Vec2::new(100.0, 500.0), AsteroidSize::Large),
        ];
        state.power_ups = vec![PowerUp::new(
            center,
            Some(PowerUpKind::Bomb),
            &tuning.power_ups,
            &mut Pcg32::seed_from_u64(1),
        )];

        let snap = tick(&mut state, &idle(), 1.0);
        assert_eq!(snap.score, 600);
        assert_eq!(state.level.destroyed(), 3);
        assert!(snap.events.contains(&GameEvent::Bomb { pos: center, destroyed: 3 }));
        assert!(snap.bomb.is_some());
        // Field was cleared, then the failsafe refilled one
        assert_eq!(state.asteroids.len(), 1);

        for _ in 0..20 {
            tick(&mut state, &idle(), 50.0);
        }
        assert!(state.bomb.is_none());
    }

    #[test]
    fn test_bomb_reaching_quota_transitions_once() {
        let mut state = new_game();
        let tuning = Arc::clone(&state.tuning);
        let center = state.player_pos().unwrap();
        for _ in 0..24 {
            state.level.add_destroyed();
        }
        state.asteroids = (0..3)
            .map(|i| still_rock(Vec2::new(100.0 + i as f32 * 250.0, 80.0), AsteroidSize::Small))
            .collect();
        state.power_ups = vec![PowerUp::new(
            center,
            Some(PowerUpKind::Bomb),
            &tuning.power_ups,
            &mut Pcg32::seed_from_u64(1),
        )];

        let snap = tick(&mut state, &idle(), 1.0);
        let transitions = snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::LevelTransitionStarted { .. }))
            .count();
        assert_eq!(transitions, 1);
        assert!(state.level.is_transitioning());
        assert_eq!(state.level.destroyed(), 25);
        assert_eq!(snap.score, 300);
        // No spawning while transitioning
        assert!(state.asteroids.is_empty());

        let mut level_ups = Vec::new();
        for _ in 0..40 {
            let snap = tick(&mut state, &idle(), 50.0);
            level_ups.extend(snap.events.into_iter().filter(|e| matches!(e, GameEvent::LevelUp { .. })));
        }
        assert_eq!(level_ups, vec![GameEvent::LevelUp { level: 2 }]);
        assert_eq!(state.level.level(), 2);
        assert_eq!(state.level.required(), 35);
        assert_eq!(state.asteroids.len(), 5);
        assert_eq!(state.spawner.interval_ms(), 2800.0);
    }

    #[test]
    fn test_failsafe_spawns_into_empty_field() {
        let mut state = new_game();
        state.asteroids.clear();
        tick(&mut state, &idle(), 1.0);
        assert_eq!(state.asteroids.len(), 1);
    }

    #[test]
    fn test_no_spawn_while_transitioning() {
        let mut state = new_game();
        state.asteroids.clear();
        state.level.start_transition();
        tick(&mut state, &idle(), 10.0);
        assert!(state.asteroids.is_empty());
    }

    #[test]
    fn test_timed_spawning() {
        let mut state = new_game();
        let before = state.asteroids.len();
        for _ in 0..59 {
            tick(&mut state, &idle(), 50.0);
        }
        assert_eq!(state.asteroids.len(), before);

        tick(&mut state, &idle(), 50.0);
        assert_eq!(state.time_ms, 3000.0);
        assert_eq!(state.asteroids.len(), before + 1);
    }

    #[test]
    fn test_level_up_restarts_spawn_timer() {
        let mut state = new_game();
        state.asteroids.clear();
        state.level.start_transition();

        let mut leveled = false;
        for _ in 0..100 {
            let snap = tick(&mut state, &idle(), 50.0);
            if snap.events.iter().any(|e| matches!(e, GameEvent::LevelUp { .. })) {
                leveled = true;
                break;
            }
        }
        assert!(leveled);
        assert_eq!(state.asteroids.len(), 5);
        assert_eq!(state.spawner.interval_ms(), 2800.0);

        // Park the wave off-screen so nothing collides or empties the field
        for a in &mut state.asteroids {
            a.vel = Vec2::ZERO;
        }
        let leveled_at = state.time_ms;

        for _ in 0..55 {
            tick(&mut state, &idle(), 50.0);
        }
        assert_eq!(state.time_ms - leveled_at, 2750.0);
        assert_eq!(state.asteroids.len(), 5);

        tick(&mut state, &idle(), 50.0);
        assert_eq!(state.asteroids.len(), 6);
    }

    #[test]
    fn test_fire_is_debounced_by_cooldown() {
        let mut state = new_game();
        let fire = TickInput {
            fire: true,
            pointer: Vec2::new(400.0, 0.0),
            ..Default::default()
        };
        let mut shots = 0;
        for _ in 0..10 {
            let snap = tick(&mut state, &fire, 50.0);
            shots += snap.events.iter().filter(|e| matches!(e, GameEvent::Shoot { .. })).count();
        }
        // 500ms of fire at a 250ms cadence
        assert_eq!(shots, 2);
    }

    #[test]
    fn test_thrusting_emits_exhaust() {
        let mut state = new_game();
        state.asteroids.clear();
        let thrust = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &thrust, 16.0);
        assert!(
            state
                .particles
                .iter()
                .any(|p| p.color == crate::sim::particle::palette::THRUSTER)
        );
    }

    #[test]
    fn test_determinism() {
        let tuning = Arc::new(Tuning::default());
        let mut a = GameState::new(Arc::clone(&tuning), Bounds::new(800.0, 600.0), 99999);
        let mut b = GameState::new(tuning, Bounds::new(800.0, 600.0), 99999);

        let inputs = [
            TickInput {
                start: true,
                ..Default::default()
            },
            TickInput {
                fire: true,
                pointer: Vec2::new(0.0, 0.0),
                ..Default::default()
            },
            TickInput {
                up: true,
                fire: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                let sa = tick(&mut a, input, 16.0);
                let sb = tick(&mut b, input, 16.0);
                assert_eq!(sa, sb);
            }
        }
        assert_eq!(a.asteroids.len(), b.asteroids.len());
        for (x, y) in a.asteroids.iter().zip(&b.asteroids) {
            assert_eq!(x.pos, y.pos);
        }
    }
}
