//! Circle geometry shared by every pairwise check

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Anything with a circular collision bound
pub trait Circle {
    fn center(&self) -> Vec2;
    fn radius(&self) -> f32;
}

/// Rectangular play area, origin at top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "bounds must be positive");
        Self { width, height }
    }

    /// `None` for zero, negative or non-finite sizes
    pub fn try_new(width: f32, height: f32) -> Option<Self> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        (usable(width) && usable(height)).then_some(Self { width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if a circle at `pos` has fully left the area by more than `margin`
    pub fn is_outside(&self, pos: Vec2, margin: f32) -> bool {
        pos.x < -margin || pos.x > self.width + margin || pos.y < -margin || pos.y > self.height + margin
    }
}

/// Strict circle overlap: touching circles do not collide
#[inline]
pub fn circles_intersect(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// Overlap test between two bodies
#[inline]
pub fn intersects(a: &impl Circle, b: &impl Circle) -> bool {
    circles_intersect(a.center(), a.radius(), b.center(), b.radius())
}

#[inline]
pub fn point_in_circle(point: Vec2, circle: &impl Circle) -> bool {
    point.distance(circle.center()) < circle.radius()
}

/// Unit direction from `from` toward `to`, or +X when the points coincide
pub fn direction_or_default(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    let len = delta.length();
    if len > f32::EPSILON { delta / len } else { Vec2::X }
}

/// Collision normal pointing from `a` to `b`
#[inline]
pub fn collision_normal(a: &impl Circle, b: &impl Circle) -> Vec2 {
    direction_or_default(a.center(), b.center())
}
