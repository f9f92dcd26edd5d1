//! Asteroid Crasher entry point
//!
//! On the web the page script constructs `WebGame` and drives it from
//! `requestAnimationFrame`. Natively this runs a headless demo with the
//! autopilot at the controls:
//!
//! ```text
//! asteroid-crasher [seed] [ticks] [tuning.json]
//! ```

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
    }
    log::info!("Asteroid Crasher (web) ready");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = args.first().and_then(|s| s.parse().ok()).unwrap_or(42);
    let ticks = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3_600);

    let tuning = match args.get(2) {
        Some(path) => match asteroid_crasher::Tuning::load_from_file(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Failed to load tuning from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => asteroid_crasher::Tuning::default(),
    };

    log::info!("Asteroid Crasher (native) headless demo: seed {seed}, {ticks} ticks");
    demo::run(tuning, seed, ticks);
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::sync::Arc;
    use std::time::{SystemTime, UNIX_EPOCH};

    use asteroid_crasher::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use asteroid_crasher::sim::Bounds;
    use asteroid_crasher::{GameEvent, GameState, HighScores, TickInput, Tuning, tick};

    /// 60 Hz frames
    const FRAME_MS: f32 = 1000.0 / 60.0;

    pub fn run(tuning: Tuning, seed: u64, ticks: u32) {
        let mut state = GameState::new(
            Arc::new(tuning),
            Bounds::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            seed,
        );
        let mut high_scores = HighScores::load();
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        let mut shots = 0u32;
        for _ in 0..ticks {
            let snapshot = tick(&mut state, &input, FRAME_MS);

            for event in &snapshot.events {
                match event {
                    GameEvent::Shoot { .. } => shots += 1,
                    GameEvent::AsteroidHit { .. } | GameEvent::AsteroidDestroyed { .. } => {
                        log::trace!("{event:?}");
                    }
                    other => log::info!("{other:?}"),
                }
                high_scores.record(event, now_ms());
            }

            if snapshot.is_game_over() {
                break;
            }
        }

        let level = state.level.info();
        println!(
            "score {} | level {} ({}/{}) | lives {} | {} shots over {:.1}s",
            state.score,
            level.level,
            level.destroyed,
            level.required,
            state.lives,
            shots,
            state.time_ms / 1000.0
        );
        if let Some(best) = high_scores.top_score() {
            println!("best this session: {best}");
        }
        high_scores.save();
    }

    fn now_ms() -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}
