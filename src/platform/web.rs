//! Browser binding
//!
//! The page script forwards DOM input through the setters and calls
//! `frame` from `requestAnimationFrame`; drawing and audio read the
//! returned JSON snapshot.

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use super::FrameClock;
use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::highscores::HighScores;
use crate::sim::{Bounds, GameState, TickInput, tick};
use crate::tuning::Tuning;

#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    input: TickInput,
    clock: FrameClock,
    high_scores: HighScores,
}

#[wasm_bindgen]
impl WebGame {
    /// `tuning_json` overrides the default balance table when given
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u64, tuning_json: Option<String>) -> Result<WebGame, JsValue> {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Tuning::default(),
        };
        let clock = FrameClock::new(tuning.game.max_frame_ms);
        let bounds = Bounds::try_new(width, height).unwrap_or_else(|| {
            log::warn!("Canvas is {width}x{height}, starting at {DEFAULT_WIDTH}x{DEFAULT_HEIGHT}");
            Bounds::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
        });
        let state = GameState::new(Arc::new(tuning), bounds, seed);

        Ok(Self {
            state,
            input: TickInput::default(),
            clock,
            high_scores: HighScores::load(),
        })
    }

    pub fn set_keys(&mut self, up: bool, down: bool, left: bool, right: bool) {
        self.input.up = up;
        self.input.down = down;
        self.input.left = left;
        self.input.right = right;
    }

    pub fn set_joystick(&mut self, x: f32, y: f32) {
        self.input.joystick = Some(glam::Vec2::new(x, y));
    }

    pub fn clear_joystick(&mut self) {
        self.input.joystick = None;
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.input.pointer = glam::Vec2::new(x, y);
    }

    pub fn set_touch_aim(&mut self, x: f32, y: f32) {
        self.input.touch_aim = Some(glam::Vec2::new(x, y));
    }

    pub fn clear_touch_aim(&mut self) {
        self.input.touch_aim = None;
    }

    pub fn set_fire(&mut self, fire: bool) {
        self.input.fire = fire;
    }

    pub fn set_idle_mode(&mut self, idle: bool) {
        self.input.idle_mode = idle;
    }

    /// Queue a start for the next frame
    pub fn start(&mut self) {
        self.input.start = true;
    }

    /// Queue a pause toggle for the next frame
    pub fn toggle_pause(&mut self) {
        self.input.pause = true;
    }

    /// Drop the frame timestamp so a hidden tab does not resume with a jump
    pub fn on_visibility_change(&mut self) {
        self.clock.reset();
    }

    /// A collapsed canvas (hidden or minimized) keeps the last usable size
    pub fn resize(&mut self, width: f32, height: f32) {
        match Bounds::try_new(width, height) {
            Some(bounds) => self.state.resize(bounds),
            None => log::debug!("Ignoring resize to {width}x{height}"),
        }
    }

    /// Advance one animation frame; returns the snapshot as JSON
    pub fn frame(&mut self, timestamp: f64) -> Result<String, JsValue> {
        let dt = self.clock.delta(timestamp);
        let snapshot = tick(&mut self.state, &self.input, dt);

        // Clear one-shot inputs after processing
        self.input.start = false;
        self.input.pause = false;

        for event in &snapshot.events {
            if self.high_scores.record(event, js_sys::Date::now()).is_some() {
                self.high_scores.save();
            }
        }

        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Entity positions for drawing, as JSON
    pub fn entities(&self) -> String {
        let scene = serde_json::json!({
            "player": self.state.player,
            "bullets": self.state.bullets,
            "asteroids": self.state.asteroids,
            "powerUps": self.state.power_ups,
            "particles": self.state.particles,
        });
        scene.to_string()
    }

    pub fn high_scores(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.high_scores).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
