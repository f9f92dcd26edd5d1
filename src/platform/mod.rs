//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (animation-frame timestamps to capped deltas)
//! - The wasm-bindgen surface the page script drives

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebGame;

/// Turns raw frame timestamps into simulation deltas
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_frame_ms: f32,
}

impl FrameClock {
    pub fn new(max_frame_ms: f32) -> Self {
        Self {
            last_ms: None,
            max_frame_ms,
        }
    }

    /// Delta since the previous timestamp, in [0, max_frame_ms].
    /// The first frame after construction or [`FrameClock::reset`] yields 0.
    pub fn delta(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => (timestamp_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        dt.min(self.max_frame_ms)
    }

    /// Forget the last timestamp, e.g. when the tab regains focus
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
