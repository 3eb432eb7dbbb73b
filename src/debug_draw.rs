//! Debug drawing hooks.
//!
//! The physics core never renders anything itself. A host that wants to see
//! bodies and contacts implements [`DebugDraw`] on top of its own line
//! renderer and passes it to `RigidShape::draw` / `CollisionInfo::draw`.

use crate::math::Vec2;

/// RGBA, each channel in [0, 1].
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];

/// Number of segments used to approximate a circle outline.
pub const CIRCLE_SEGMENTS: usize = 16;

pub trait DebugDraw {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);

    fn draw_circle(&mut self, center: Vec2, radius: f64, color: Color) {
        let delta = std::f64::consts::TAU / CIRCLE_SEGMENTS as f64;
        let mut prev = center + Vec2::new(radius, 0.0);
        for i in 1..=CIRCLE_SEGMENTS {
            let theta = delta * i as f64;
            let next = center + Vec2::new(radius * theta.cos(), radius * theta.sin());
            self.draw_line(prev, next, color);
            prev = next;
        }
    }

    /// Axis-aligned "+" marker.
    fn draw_cross(&mut self, center: Vec2, half_len: f64, color: Color) {
        self.draw_line(center - Vec2::new(half_len, 0.0), center + Vec2::new(half_len, 0.0), color);
        self.draw_line(center - Vec2::new(0.0, half_len), center + Vec2::new(0.0, half_len), color);
    }
}

/// Records every line it is asked to draw. Handy for headless hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct LineRecorder {
    pub lines: Vec<(Vec2, Vec2, Color)>,
}

impl DebugDraw for LineRecorder {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.lines.push((from, to, color));
    }
}
