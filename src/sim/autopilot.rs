//! Demo-mode pilot
//!
//! Produces the input a simple player would give: start from the menu, aim
//! at the closest rock with a little lead, keep the trigger held, back away
//! from anything too close and otherwise go collect power-ups.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Extra clearance beyond the two radii before the pilot starts evading
const DANGER_MARGIN: f32 = 120.0;

/// Override `input` with the autopilot's choices
pub fn drive(state: &GameState, input: &TickInput) -> TickInput {
    let mut input = input.clone();

    // Auto-start from the title screen
    if state.phase == GamePhase::Menu {
        input.start = true;
    }

    let Some(player) = state.player.as_ref().filter(|p| p.alive) else {
        return input;
    };

    let nearest = state
        .asteroids
        .iter()
        .filter(|a| a.alive)
        .min_by(|a, b| {
            a.pos
                .distance_squared(player.pos)
                .partial_cmp(&b.pos.distance_squared(player.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    input.joystick = None;
    input.touch_aim = None;

    let Some(target) = nearest else {
        input.fire = false;
        return input;
    };

    // Lead the target by its travel during the bullet's flight
    let distance = target.pos.distance(player.pos);
    let flight_s = distance / state.tuning.bullet.speed.max(1.0);
    input.pointer = target.pos + target.vel * flight_s;
    input.fire = true;

    let threatened = distance < player.radius + target.radius + DANGER_MARGIN;
    let heading = if threatened {
        (player.pos - target.pos).normalize_or_zero()
    } else {
        state
            .power_ups
            .iter()
            .filter(|p| p.alive)
            .min_by(|a, b| {
                a.pos
                    .distance_squared(player.pos)
                    .partial_cmp(&b.pos.distance_squared(player.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|p| (p.pos - player.pos).normalize_or_zero())
            .unwrap_or(Vec2::ZERO)
    };

    if heading != Vec2::ZERO {
        input.joystick = Some(heading);
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::asteroid::Asteroid;
    use crate::sim::geometry::Bounds;
    use crate::sim::powerup::PowerUp;
    use crate::sim::tick::tick;
    use crate::tuning::{AsteroidSize, PowerUpKind, Tuning};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::sync::Arc;

    fn playing() -> GameState {
        let mut state = GameState::new(Arc::new(Tuning::default()), Bounds::new(800.0, 600.0), 5);
        state.start_game();
        state
    }

    fn rock_at(state: &GameState, pos: Vec2) -> Asteroid {
        let mut a = Asteroid::new(
            pos,
            AsteroidSize::Medium,
            Some(0.0),
            &state.tuning.asteroids,
            &mut Pcg32::seed_from_u64(3),
        );
        a.vel = Vec2::ZERO;
        a
    }

    #[test]
    fn test_starts_from_menu() {
        let state = GameState::new(Arc::new(Tuning::default()), Bounds::new(800.0, 600.0), 5);
        assert!(drive(&state, &TickInput::default()).start);
    }

    #[test]
    fn test_aims_at_nearest_and_fires() {
        let mut state = playing();
        let near = rock_at(&state, Vec2::new(600.0, 300.0));
        let far = rock_at(&state, Vec2::new(50.0, 50.0));
        state.asteroids = vec![far, near];

        let input = drive(&state, &TickInput::default());
        assert!(input.fire);
        assert_eq!(input.pointer, Vec2::new(600.0, 300.0));
        assert!(input.joystick.is_none());
    }

    #[test]
    fn test_evades_close_asteroid() {
        let mut state = playing();
        state.asteroids = vec![rock_at(&state, Vec2::new(480.0, 300.0))];

        let input = drive(&state, &TickInput::default());
        let stick = input.joystick.unwrap();
        assert!(stick.x < -0.99);
    }

    #[test]
    fn test_collects_power_up_when_safe() {
        let mut state = playing();
        state.asteroids = vec![rock_at(&state, Vec2::new(780.0, 580.0))];
        let tuning = Arc::clone(&state.tuning);
        state.power_ups = vec![PowerUp::new(
            Vec2::new(400.0, 100.0),
            Some(PowerUpKind::Shield),
            &tuning.power_ups,
            &mut Pcg32::seed_from_u64(3),
        )];

        let input = drive(&state, &TickInput::default());
        assert!(input.joystick.unwrap().y < -0.99);
    }

    #[test]
    fn test_idle_mode_plays_a_session() {
        let mut state = GameState::new(Arc::new(Tuning::default()), Bounds::new(800.0, 600.0), 42);
        let demo = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let mut shots = 0;
        for _ in 0..600 {
            let snap = tick(&mut state, &demo, 16.0);
            shots += snap
                .events
                .iter()
                .filter(|e| matches!(e, crate::sim::GameEvent::Shoot { .. }))
                .count();
            if snap.is_game_over() {
                break;
            }
        }
        assert!(shots > 0);
    }
}
