use crate::debug_draw::{DebugDraw, GREEN, RED};
use crate::math::Vec2;

/// Result of a narrow-phase test for one colliding pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Penetration depth, never negative.
    pub depth: f64,
    /// Unit contact normal, pointing from the first body toward the second.
    pub normal: Vec2,
    /// Contact point on the second body's side of the overlap.
    pub start: Vec2,
    /// `start + normal * depth`, on the first body's side.
    pub end: Vec2,
}

impl CollisionInfo {
    pub fn new(depth: f64, normal: Vec2, start: Vec2) -> Self {
        Self {
            depth,
            normal,
            start,
            end: start.scale_and_add(normal, depth),
        }
    }

    /// Reverses the normal and swaps the contact endpoints.
    pub fn change_dir(&mut self) {
        self.normal = -self.normal;
        std::mem::swap(&mut self.start, &mut self.end);
    }

    /// Same contact seen from the other body.
    pub fn reversed(mut self) -> Self {
        self.change_dir();
        self
    }

    pub fn draw(&self, drawer: &mut dyn DebugDraw) {
        drawer.draw_line(self.start, self.end, GREEN);
        drawer.draw_cross(self.start, 0.1 * self.depth.max(0.1), RED);
    }
}
